use rand::Rng;
use symbolhunt_core::{Placement, Symbol};

use crate::{GeneratorConfig, random};

/// Lays out the symbols of one card.
///
/// Returns one placement per symbol in random order, each with an
/// independently drawn scale and rotation from the config ranges.
pub fn render_placements<I, R>(
    config: &GeneratorConfig,
    symbols: I,
    rng: &mut R,
) -> Vec<Placement>
where
    I: IntoIterator<Item = Symbol>,
    R: Rng + ?Sized,
{
    let mut symbols: Vec<Symbol> = symbols.into_iter().collect();
    random::shuffle(rng, &mut symbols);
    symbols
        .into_iter()
        .map(|symbol| {
            let scale = random::random_in(rng, config.scale_range.clone());
            let rotation = random::random_in(rng, config.rotation_range.clone());
            Placement::new(symbol, scale, rotation)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_one_placement_per_symbol() {
        let config = GeneratorConfig::default();
        let symbols: BTreeSet<Symbol> = ["🐙", "🦀", "🐠", "🐬", "🐳", "🦈"]
            .into_iter()
            .map(Symbol::from_static)
            .collect();
        let mut rng = Pcg64::seed_from_u64(3);

        let placements = render_placements(&config, symbols.iter().cloned(), &mut rng);
        assert_eq!(placements.len(), symbols.len());
        let placed: BTreeSet<Symbol> = placements.iter().map(|p| p.symbol().clone()).collect();
        assert_eq!(placed, symbols);

        for placement in &placements {
            assert!(Placement::SCALE_RANGE.contains(&placement.scale()));
            assert!(Placement::ROTATION_RANGE.contains(&placement.rotation()));
        }
    }

    #[test]
    fn test_empty_card() {
        let config = GeneratorConfig::default();
        let mut rng = Pcg64::seed_from_u64(0);
        assert!(render_placements(&config, Vec::new(), &mut rng).is_empty());
    }
}
