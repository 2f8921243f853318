//! Information display module for reaction systems
//!
//! This module implements `Display` for [`ReactionSystem`] and, with the `simulation`
//! feature, for [`SimulationResult`], rendering them as tables.

use std::fmt::{self, Display};

use tabled::{builder::Builder, settings::Style};

#[cfg(feature = "simulation")]
use crate::simulation::result::SimulationResult;
use crate::{reaction::Reaction, species::Species, system::ReactionSystem};

/// Trait for converting system components to table records
trait TableRecord {
    /// Get the column headers for the table
    fn columns() -> Vec<String>;

    /// Convert the instance to a record for display in a table
    fn to_record(&self) -> Vec<String>;
}

impl TableRecord for Species {
    fn columns() -> Vec<String> {
        vec!["Name".to_string(), "Concentration".to_string()]
    }

    fn to_record(&self) -> Vec<String> {
        vec![self.name().to_string(), self.concentration().to_string()]
    }
}

impl TableRecord for Reaction {
    fn columns() -> Vec<String> {
        vec![
            "Equation".to_string(),
            "Rate Constant".to_string(),
            "Rate".to_string(),
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.to_string(),
            self.rate_constant().to_string(),
            self.rate().to_string(),
        ]
    }
}

impl Display for ReactionSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(vec!["Reaction System"]);

        if !self.species().is_empty() {
            builder.push_record(vec!["Species"]);
            builder.push_record(vec![to_table(self.species().iter())]);
        }

        if !self.reactions().is_empty() {
            builder.push_record(vec!["Reactions"]);
            builder.push_record(vec![to_table(self.reactions().iter())]);
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        write!(f, "{}", table)
    }
}

/// Renders the rates of change next to the current concentrations.
pub fn rates_table(system: &ReactionSystem) -> String {
    let mut builder = Builder::default();
    builder.push_record(vec!["Species", "Concentration", "Rate of Change"]);

    for (species, rate) in system.species().iter().zip(system.rates_of_change()) {
        builder.push_record(vec![
            species.name().to_string(),
            species.concentration().to_string(),
            rate.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(feature = "simulation")]
impl Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = Builder::default();

        let mut header = vec!["Time".to_string()];
        header.extend(self.species.keys().cloned());
        builder.push_record(header);

        for (i, t) in self.time.iter().enumerate() {
            let mut row = vec![format!("{t:.4}")];
            row.extend(
                self.species
                    .values()
                    .map(|values| values.get(i).map_or(String::new(), |v| format!("{v:.6}"))),
            );
            builder.push_record(row);
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        write!(f, "{}", table)
    }
}

fn to_table<'a, T>(items: impl Iterator<Item = &'a T>) -> String
where
    T: TableRecord + 'a,
{
    let mut builder = Builder::default();
    let mut columns = vec!["#".to_string()];
    columns.extend(T::columns());
    builder.push_record(columns);

    for (i, item) in items.enumerate() {
        let mut record = vec![i.to_string()];
        record.extend(item.to_record());
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn system() -> ReactionSystem {
        let a = Species::with_concentration("A", 2.0);
        let b = Species::new("B");
        let mut system = ReactionSystem::new();
        system.add_reaction(reaction!(0.5; a => b));
        system
    }

    #[test]
    fn test_display_lists_species_and_reactions() {
        let rendered = system().to_string();

        assert!(rendered.contains("Species"));
        assert!(rendered.contains("Reactions"));
        assert!(rendered.contains("A -> B"));
    }

    #[test]
    fn test_rates_table() {
        let rendered = super::rates_table(&system());

        assert!(rendered.contains("Rate of Change"));
        assert!(rendered.contains("-1"));
    }
}
