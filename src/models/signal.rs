use serde::{Deserialize, Serialize};

/// Threshold classification attached to a metric record.
///
/// Declaration order is detection order in the rendered signal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SignalKind {
    Oversold,
    Overbought,
    NearHigh,
    NearLow,
}

impl SignalKind {
    pub const ALL: [SignalKind; 4] = [
        SignalKind::Oversold,
        SignalKind::Overbought,
        SignalKind::NearHigh,
        SignalKind::NearLow,
    ];
}

/// One entry of the flat signal list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub symbol: String,
    pub name: String,
}
