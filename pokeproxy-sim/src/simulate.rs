use futures_util::future::{
    join,
    try_join,
};
use pokeproxy_data::DataStore;
use pokeproxy_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

use crate::{
    Battle,
    BattleError,
    BattleOptions,
    BattleOutcome,
    BattleSide,
    select_move,
};

/// Simulates a battle, seeding the random number generator from the options.
pub async fn simulate_battle<D>(
    data: &D,
    options: &BattleOptions,
) -> Result<BattleOutcome, BattleError>
where
    D: DataStore + ?Sized,
{
    let prng = Box::new(RealPseudoRandomNumberGenerator::new(options.seed()));
    simulate_battle_with_prng(data, options, prng).await
}

/// Simulates a battle with the given random number generator.
///
/// Both creatures are loaded concurrently, and the battle does not start until both are
/// available. Failing to load either creature or the type chart fails the whole simulation.
pub async fn simulate_battle_with_prng<D>(
    data: &D,
    options: &BattleOptions,
    prng: Box<dyn PseudoRandomNumberGenerator>,
) -> Result<BattleOutcome, BattleError>
where
    D: DataStore + ?Sized,
{
    options.validate()?;
    let (attacker, defender) = try_join(
        data.load_creature(&options.attacker),
        data.load_creature(&options.defender),
    )
    .await?;
    let type_chart = data.get_type_chart().await?;
    let (attacker_move, defender_move) = join(
        select_move(data, &attacker, options.attacker_moves()),
        select_move(data, &defender, options.defender_moves()),
    )
    .await;

    let level = options.level();
    let battle = Battle::new(
        BattleSide::new(attacker, attacker_move, level),
        BattleSide::new(defender, defender_move, level),
        type_chart,
        level,
        options.max_turns(),
        prng,
    );
    Ok(battle.run())
}
