/// Qualitative frame-rate tier attached to a renderable surface.
///
/// Carries no behavior; policy code elsewhere ranks surfaces by it. The
/// derived ordering is the declaration order and has no numeric meaning
/// beyond that ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FrameRateCategory {
    Default,
    NoPreference,
    Low,
    Normal,
    HighHint,
    High,
}
