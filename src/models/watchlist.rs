//! Watchlist of tracked symbols

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub symbol: String,
    pub name: String,
}

impl WatchlistEntry {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

/// Ordered symbol → display name mapping. Order is the configuration order
/// and drives tie-breaking everywhere downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist {
    entries: Vec<WatchlistEntry>,
}

const CANADA_FOCUS: &[(&str, &str)] = &[
    // US benchmarks
    ("SPY", "S&P 500"),
    ("QQQ", "Nasdaq 100"),
    ("IWM", "Russell 2000"),
    // Canada broad market
    ("XIU.TO", "S&P/TSX 60"),
    ("XIC.TO", "TSX Capped Composite"),
    ("ZCN.TO", "TSX Composite"),
    ("HXT.TO", "TSX 60 (swap)"),
    // Banks
    ("RY.TO", "Royal Bank"),
    ("TD.TO", "TD Bank"),
    ("BNS.TO", "Scotiabank"),
    ("BMO.TO", "Bank of Montreal"),
    ("CM.TO", "CIBC"),
    ("NA.TO", "National Bank"),
    // Energy / pipelines
    ("CNQ.TO", "Canadian Natural"),
    ("SU.TO", "Suncor"),
    ("ENB.TO", "Enbridge"),
    ("TRP.TO", "TC Energy"),
    ("CVE.TO", "Cenovus"),
    // Telecom
    ("BCE.TO", "BCE"),
    ("T.TO", "TELUS"),
    ("RCI-B.TO", "Rogers"),
    // Tech
    ("SHOP.TO", "Shopify (TSX)"),
    ("CSU.TO", "Constellation Software"),
    ("GIB-A.TO", "CGI"),
    // Materials / gold
    ("ABX.TO", "Barrick Gold"),
    ("AEM.TO", "Agnico Eagle"),
    ("WPM.TO", "Wheaton Precious"),
    // Utilities
    ("FTS.TO", "Fortis"),
    ("EMA.TO", "Emera"),
    ("AQN.TO", "Algonquin"),
    // Sector ETFs
    ("XEG.TO", "iShares Energy"),
    ("XFN.TO", "iShares Financials"),
    ("ZEB.TO", "BMO Eq-Weight Banks"),
];

impl Watchlist {
    /// Build from entries. A symbol listed twice keeps its first position and
    /// the last display name.
    pub fn new(entries: Vec<WatchlistEntry>) -> Self {
        let mut deduped: Vec<WatchlistEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if let Some(existing) = deduped.iter_mut().find(|e| e.symbol == entry.symbol) {
                existing.name = entry.name;
            } else {
                deduped.push(entry);
            }
        }
        Self { entries: deduped }
    }

    pub fn canada_focus() -> Self {
        Self::new(
            CANADA_FOCUS
                .iter()
                .map(|(symbol, name)| WatchlistEntry::new(*symbol, *name))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn symbols(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.symbol.clone()).collect()
    }

    pub fn name_of(&self, symbol: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Watchlist {
    fn default() -> Self {
        Self::canada_focus()
    }
}
