use std::fmt;

use crashnote_types::protocol::{Backtrace, Frame, SourceKind};

/// Where an error was observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The script engine's uncaught error handler.
    Script,
    /// The native exception bridge on iOS.
    Ios,
    /// The native exception bridge on Android.
    Android,
    /// An explicit `notify` call.
    Manual,
}

impl Origin {
    /// The order in which backtrace sources are considered for the primary
    /// backtrace of an error from this origin.
    pub fn precedence(self) -> &'static [SourceKind] {
        match self {
            Origin::Script | Origin::Manual => {
                &[SourceKind::ComponentStack, SourceKind::ScriptStack]
            }
            Origin::Ios => &[
                SourceKind::ComponentStack,
                SourceKind::NativeStack,
                SourceKind::CallStack,
            ],
            Origin::Android => &[SourceKind::NativeStack],
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Origin::Script => "script",
            Origin::Ios => "ios",
            Origin::Android => "android",
            Origin::Manual => "manual",
        })
    }
}

/// The outcome of [`select_backtrace`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    /// The authoritative backtrace, if any candidate had frames.
    pub primary: Option<Backtrace>,
    /// Every other attempted backtrace, in precedence order.
    pub supplementary: Vec<Backtrace>,
}

impl Selection {
    /// The source of the primary backtrace.
    pub fn primary_source(&self) -> Option<SourceKind> {
        self.primary.as_ref().map(|bt| bt.source)
    }

    /// The frames of the primary backtrace, empty if there is none.
    pub fn primary_frames(&self) -> &[Frame] {
        self.primary
            .as_ref()
            .map_or(&[][..], |bt| bt.frames.as_slice())
    }

    /// Consumes the selection, returning the primary frames.
    pub fn into_primary_frames(self) -> Vec<Frame> {
        self.primary.map(|bt| bt.frames).unwrap_or_default()
    }
}

/// Picks the primary backtrace among the candidates attempted for one error.
///
/// Candidates are ordered by the origin's [`precedence`](Origin::precedence);
/// the first one with frames becomes primary.  All other candidates are
/// kept as supplementary, including empty ones, so nothing that was parsed
/// is lost.  Candidates of a kind the origin does not rank are never primary
/// and are appended after the ranked ones.
pub fn select_backtrace(origin: Origin, candidates: Vec<Backtrace>) -> Selection {
    let precedence = origin.precedence();
    let rank = |bt: &Backtrace| {
        precedence
            .iter()
            .position(|kind| *kind == bt.source)
            .unwrap_or(precedence.len())
    };

    let mut ordered = candidates;
    // stable, so candidates of the same rank keep their order
    ordered.sort_by_key(rank);

    let primary_idx = ordered
        .iter()
        .position(|bt| bt.is_available() && rank(bt) < precedence.len());

    let primary = primary_idx.map(|idx| ordered.remove(idx));
    Selection {
        primary,
        supplementary: ordered,
    }
}
