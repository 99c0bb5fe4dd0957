use pokeproxy_data::{
    CreatureData,
    MoveData,
};
use pokeproxy_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

/// Damage multiplier of a critical hit.
const CRITICAL_HIT_MULTIPLIER: f64 = 1.5;
/// Damage multiplier when the move type matches one of the user's types.
const SAME_TYPE_ATTACK_BONUS: f64 = 1.5;

/// Calculates the damage of a single hit.
///
/// `modifier` is the product of every multiplier applied on top of the base damage (same-type
/// bonus, type effectiveness, critical hit). A random variance factor in `[0.85, 1.0]` is drawn
/// from the generator. The result is never below 1.
pub fn calc_damage(
    prng: &mut dyn PseudoRandomNumberGenerator,
    level: u32,
    power: u32,
    attack: f64,
    defense: f64,
    modifier: f64,
) -> u32 {
    let base = ((2.0 * level as f64 / 5.0 + 2.0) * power as f64 * (attack / defense.max(1.0)))
        / 50.0
        + 2.0;
    let variance = rand_util::uniform(prng, 0.85, 1.0);
    let damage = (base * modifier * variance).floor();
    (damage as u32).max(1)
}

/// Rolls for a critical hit, returning the damage multiplier.
pub fn critical_hit_modifier(prng: &mut dyn PseudoRandomNumberGenerator) -> f64 {
    if rand_util::chance(prng, 1, 16) {
        CRITICAL_HIT_MULTIPLIER
    } else {
        1.0
    }
}

/// Same-type attack bonus of a move used by the given creature.
pub fn same_type_attack_bonus(user: &CreatureData, move_data: &MoveData) -> f64 {
    if user.has_type(&move_data.move_type) {
        SAME_TYPE_ATTACK_BONUS
    } else {
        1.0
    }
}

#[cfg(test)]
mod damage_test {
    use pokeproxy_data::DamageClass;
    use pokeproxy_prng::PseudoRandomNumberGenerator;
    use pokeproxy_test_utils::{
        ControlledRandomNumberGenerator,
        creature,
        damaging_move,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        calc_damage,
        critical_hit_modifier,
        same_type_attack_bonus,
    };

    fn prng_with_values(values: &[u64]) -> ControlledRandomNumberGenerator {
        let mut prng = ControlledRandomNumberGenerator::new(Some(0));
        prng.insert_fake_values(values.iter().enumerate().map(|(i, v)| (i + 1, *v)));
        prng
    }

    #[test]
    fn applies_variance_range() {
        let mut prng = prng_with_values(&[u32::MAX as u64, 0]);
        assert_eq!(calc_damage(&mut prng, 50, 100, 100.0, 100.0, 1.0), 46);
        assert_eq!(calc_damage(&mut prng, 50, 100, 100.0, 100.0, 1.0), 39);
    }

    #[test]
    fn applies_modifier() {
        let mut prng = prng_with_values(&[u32::MAX as u64, u32::MAX as u64]);
        assert_eq!(calc_damage(&mut prng, 50, 100, 100.0, 100.0, 2.0), 92);
        assert_eq!(calc_damage(&mut prng, 50, 100, 100.0, 100.0, 0.5), 23);
    }

    #[test]
    fn never_deals_less_than_one() {
        let mut prng = prng_with_values(&[0, 0]);
        assert_eq!(calc_damage(&mut prng, 1, 1, 1.0, 1000.0, 0.0), 1);
        assert_eq!(calc_damage(&mut prng, 1, 1, 0.0, 0.0, 0.25), 1);
    }

    #[test]
    fn guards_zero_defense() {
        let mut prng = prng_with_values(&[u32::MAX as u64, u32::MAX as u64]);
        let zero = calc_damage(&mut prng, 50, 50, 10.0, 0.0, 1.0);
        let one = calc_damage(&mut prng, 50, 50, 10.0, 1.0, 1.0);
        assert_eq!(zero, one);
    }

    #[test]
    fn consumes_one_value_per_hit() {
        let mut prng = prng_with_values(&[]);
        calc_damage(&mut prng, 50, 40, 50.0, 50.0, 1.0);
        assert_eq!(prng.sequence_count(), 1);
        prng.next();
        assert_eq!(prng.sequence_count(), 2);
    }

    #[test]
    fn rolls_critical_hits_one_in_sixteen() {
        let mut prng = prng_with_values(&[0, 1, 15, 16]);
        assert_eq!(critical_hit_modifier(&mut prng), 1.5);
        assert_eq!(critical_hit_modifier(&mut prng), 1.0);
        assert_eq!(critical_hit_modifier(&mut prng), 1.0);
        assert_eq!(critical_hit_modifier(&mut prng), 1.5);
    }

    #[test]
    fn grants_same_type_bonus() {
        let user = creature(6, "charizard", &["fire", "flying"], [78, 84, 109, 100], &[]);
        let flamethrower = damaging_move("flamethrower", "fire", DamageClass::Special, 90, None);
        let air_slash = damaging_move("air-slash", "flying", DamageClass::Special, 75, None);
        let slash = damaging_move("slash", "normal", DamageClass::Physical, 70, None);
        assert_eq!(same_type_attack_bonus(&user, &flamethrower), 1.5);
        assert_eq!(same_type_attack_bonus(&user, &air_slash), 1.5);
        assert_eq!(same_type_attack_bonus(&user, &slash), 1.0);
    }
}
