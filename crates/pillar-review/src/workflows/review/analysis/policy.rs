use super::super::domain::ReviewInput;
use super::Implication;

/// Picks the band with the most projects. Compares raw counts, not ratios.
pub(crate) fn dominant_implication(input: &ReviewInput) -> Implication {
    let (green, amber, red) = (input.green, input.amber, input.red);

    if green >= amber && green >= red {
        Implication::GreenMajority
    } else if amber >= green && amber >= red {
        Implication::AmberMajority
    } else {
        Implication::RedMajority
    }
}
