use futures_util::{
    StreamExt,
    stream,
};
use log::debug;
use pokeproxy_data::{
    CreatureData,
    DamageClass,
    DataStore,
    MoveData,
};

/// Number of known moves considered when no move is chosen explicitly.
pub const MAX_FALLBACK_CANDIDATES: usize = 40;

/// Number of move loads in flight at once while scanning known moves.
const CANDIDATE_CONCURRENCY: usize = 8;

/// The move used when nothing better can be resolved for a creature.
pub fn default_move(creature: &CreatureData) -> MoveData {
    MoveData {
        id: 0,
        name: "struggle".to_owned(),
        power: Some(50),
        pp: None,
        accuracy: Some(100),
        priority: 0,
        move_type: creature.primary_type().unwrap_or("normal").to_owned(),
        damage_class: Some(DamageClass::Physical),
        effect_entries: Vec::new(),
        effect_chance: None,
    }
}

/// Resolves the single move a creature uses for an entire battle.
///
/// Explicit move names are tried in order, and the first that loads is used. Otherwise, the
/// creature's known moves are scanned in learn order and the most powerful damaging move wins,
/// with ties going to the move learned first. Failing both, [`default_move`] is used. Load
/// failures are never surfaced.
pub async fn select_move<D>(data: &D, creature: &CreatureData, explicit: &[String]) -> MoveData
where
    D: DataStore + ?Sized,
{
    for name in explicit {
        match data.load_move(name).await {
            Ok(move_data) => {
                debug!("{} uses requested move {}", creature.name, move_data.name);
                return move_data;
            }
            Err(err) => debug!("skipping requested move {name} for {}: {err}", creature.name),
        }
    }

    let names = creature
        .moves
        .iter()
        .take(MAX_FALLBACK_CANDIDATES)
        .map(|known| known.name.clone())
        .collect::<Vec<_>>();
    let candidates = stream::iter(names)
        .map(|name| async move { data.load_move(&name).await })
        .buffered(CANDIDATE_CONCURRENCY)
        .collect::<Vec<_>>()
        .await;

    let mut best: Option<MoveData> = None;
    for candidate in candidates {
        let candidate = match candidate {
            Ok(candidate) => candidate,
            Err(err) => {
                debug!("skipping known move of {}: {err}", creature.name);
                continue;
            }
        };
        if !candidate.is_damaging() {
            continue;
        }
        if best
            .as_ref()
            .is_none_or(|best| candidate.base_power() > best.base_power())
        {
            best = Some(candidate);
        }
    }

    match best {
        Some(move_data) => {
            debug!("{} uses its strongest known move {}", creature.name, move_data.name);
            move_data
        }
        None => {
            debug!("{} has no usable damaging move, falling back to struggle", creature.name);
            default_move(creature)
        }
    }
}

#[cfg(test)]
mod move_selector_test {
    use pokeproxy_data::{
        DamageClass,
        MoveData,
    };
    use pokeproxy_test_utils::{
        TestDataStore,
        creature,
        damaging_move,
        status_move,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        MAX_FALLBACK_CANDIDATES,
        default_move,
        select_move,
    };

    fn moves() -> Vec<MoveData> {
        vec![
            damaging_move("scratch", "normal", DamageClass::Physical, 40, Some(100)),
            damaging_move("ember", "fire", DamageClass::Special, 40, Some(100)),
            damaging_move("flamethrower", "fire", DamageClass::Special, 90, Some(100)),
            damaging_move("fire-blast", "fire", DamageClass::Special, 110, Some(85)),
            damaging_move("flare-blitz", "fire", DamageClass::Physical, 120, Some(100)),
            status_move("growl", "normal", "Lowers the target's Attack.", None),
        ]
    }

    fn data_store() -> TestDataStore {
        let mut data = TestDataStore::new();
        for move_data in moves() {
            data.add_move(move_data);
        }
        data
    }

    #[tokio::test]
    async fn uses_first_loadable_explicit_move() {
        let mut data = data_store();
        data.fail_move("flare-blitz");
        let charmander = creature(4, "charmander", &["fire"], [39, 52, 60, 65], &["scratch"]);
        let selected = select_move(
            &data,
            &charmander,
            &[
                "flare-blitz".to_owned(),
                "unknown".to_owned(),
                "Growl".to_owned(),
                "ember".to_owned(),
            ],
        )
        .await;
        assert_eq!(selected.name, "growl");
    }

    #[tokio::test]
    async fn picks_most_powerful_damaging_known_move() {
        let mut data = data_store();
        data.fail_move("flare-blitz");
        let charmander = creature(
            4,
            "charmander",
            &["fire"],
            [39, 52, 60, 65],
            &["growl", "scratch", "flare-blitz", "ember", "fire-blast", "flamethrower"],
        );
        let selected = select_move(&data, &charmander, &[]).await;
        assert_eq!(selected.name, "fire-blast");
    }

    #[tokio::test]
    async fn breaks_power_ties_by_learn_order() {
        let data = data_store();
        let charmander = creature(
            4,
            "charmander",
            &["fire"],
            [39, 52, 60, 65],
            &["growl", "ember", "scratch"],
        );
        let selected = select_move(&data, &charmander, &[]).await;
        assert_eq!(selected.name, "ember");
    }

    #[tokio::test]
    async fn falls_back_to_known_moves_when_explicit_moves_fail() {
        let data = data_store();
        let charmander = creature(4, "charmander", &["fire"], [39, 52, 60, 65], &["scratch"]);
        let selected = select_move(&data, &charmander, &["unknown".to_owned()]).await;
        assert_eq!(selected.name, "scratch");
    }

    #[tokio::test]
    async fn scans_limited_number_of_known_moves() {
        let mut data = TestDataStore::new();
        let mut known = Vec::new();
        for i in 0..MAX_FALLBACK_CANDIDATES {
            let name = format!("weak-{i}");
            data.add_move(status_move(&name, "normal", "Does nothing.", None));
            known.push(name);
        }
        data.add_move(damaging_move(
            "hyper-beam",
            "normal",
            DamageClass::Special,
            150,
            Some(90),
        ));
        known.push("hyper-beam".to_owned());
        let known = known.iter().map(|name| name.as_str()).collect::<Vec<_>>();
        let eevee = creature(133, "eevee", &["normal"], [55, 55, 45, 55], &known);

        let selected = select_move(&data, &eevee, &[]).await;
        assert_eq!(selected, default_move(&eevee));
        assert_eq!(data.move_loads(), MAX_FALLBACK_CANDIDATES);
    }

    #[tokio::test]
    async fn uses_struggle_of_primary_type_without_damaging_moves() {
        let data = data_store();
        let charmander = creature(
            4,
            "charmander",
            &["fire", "dragon"],
            [39, 52, 60, 65],
            &["growl"],
        );
        let selected = select_move(&data, &charmander, &[]).await;
        assert_eq!(selected.name, "struggle");
        assert_eq!(selected.power, Some(50));
        assert_eq!(selected.accuracy, Some(100));
        assert_eq!(selected.move_type, "fire");
        assert_eq!(selected.damage_class, Some(DamageClass::Physical));
        assert_eq!(selected.effect_chance, None);
        assert!(selected.effect_entries.is_empty());
    }
}
