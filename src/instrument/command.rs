//! Batched add/remove directives sent to agents.

use super::live_instrument::LiveInstrument;
use super::location::SourceLocation;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandType {
    AddLiveInstrument,
    RemoveLiveInstrument,
}

/// A command verb applied to a set of instruments and a set of locations
///
/// Both collections have set semantics: duplicates (by value) are
/// dropped on insert and equality ignores order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveInstrumentCommand {
    pub command_type: CommandType,

    #[serde(default, deserialize_with = "deserialize_instrument_set")]
    instruments: Vec<LiveInstrument>,

    #[serde(default)]
    locations: BTreeSet<SourceLocation>,
}

impl LiveInstrumentCommand {
    pub fn new(command_type: CommandType) -> Self {
        Self {
            command_type,
            instruments: Vec::new(),
            locations: BTreeSet::new(),
        }
    }

    pub fn with_instruments(
        mut self,
        instruments: impl IntoIterator<Item = LiveInstrument>,
    ) -> Self {
        for instrument in instruments {
            self.add_instrument(instrument);
        }
        self
    }

    pub fn with_locations(mut self, locations: impl IntoIterator<Item = SourceLocation>) -> Self {
        self.locations.extend(locations);
        self
    }

    /// Add an instrument, returning false if an equal one is already present
    pub fn add_instrument(&mut self, instrument: LiveInstrument) -> bool {
        if self.instruments.contains(&instrument) {
            return false;
        }
        self.instruments.push(instrument);
        true
    }

    /// Add a location, returning false if an equal one is already present
    pub fn add_location(&mut self, location: SourceLocation) -> bool {
        self.locations.insert(location)
    }

    pub fn instruments(&self) -> &[LiveInstrument] {
        &self.instruments
    }

    pub fn locations(&self) -> &BTreeSet<SourceLocation> {
        &self.locations
    }

    pub fn contains_instrument(&self, instrument: &LiveInstrument) -> bool {
        self.instruments.contains(instrument)
    }
}

impl PartialEq for LiveInstrumentCommand {
    fn eq(&self, other: &Self) -> bool {
        self.command_type == other.command_type
            && self.locations == other.locations
            && self.instruments.len() == other.instruments.len()
            && self
                .instruments
                .iter()
                .all(|instrument| other.instruments.contains(instrument))
    }
}

fn deserialize_instrument_set<'de, D>(deserializer: D) -> Result<Vec<LiveInstrument>, D::Error>
where
    D: Deserializer<'de>,
{
    let decoded = Vec::<LiveInstrument>::deserialize(deserializer)?;
    let mut instruments: Vec<LiveInstrument> = Vec::with_capacity(decoded.len());
    for instrument in decoded {
        if !instruments.contains(&instrument) {
            instruments.push(instrument);
        }
    }
    Ok(instruments)
}
