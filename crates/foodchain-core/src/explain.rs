//! Plain-language explanation of a chain for the classroom panel.

use foodchain_types::{Chain, PopulationModel, TrophicLevel};

/// Explain who eats whom and which model is selected.
pub fn explain(chain: &Chain, model: PopulationModel) -> String {
    let producer = chain.name(TrophicLevel::Producer);
    let primary = chain.name(TrophicLevel::PrimaryConsumer);
    let secondary = chain.name(TrophicLevel::SecondaryConsumer);
    let tertiary = chain.name(TrophicLevel::TertiaryConsumer);

    [
        format!("{primary} eats {producer}, so energy flows from producer to primary consumer."),
        format!("{secondary} eats {primary}, and {tertiary} eats {secondary}."),
        "Typically many producers support fewer consumers at higher levels.".to_owned(),
        format!("Model: {model} ({}).", model.description()),
    ]
    .join("\n")
}

/// [`explain`] plus a line describing the change that was just applied.
pub fn explain_change(
    chain: &Chain,
    model: PopulationModel,
    changed: TrophicLevel,
    new_value: u64,
) -> String {
    format!(
        "{}\nChanged {changed} to {new_value}, then updated linked levels.",
        explain(chain, model)
    )
}
