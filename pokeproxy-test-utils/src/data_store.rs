use std::sync::{
    Arc,
    atomic::{
        AtomicUsize,
        Ordering,
    },
};

use ahash::{
    HashMap,
    HashMapExt,
    HashSet,
    HashSetExt,
};
use async_trait::async_trait;
use pokeproxy_data::{
    CreatureData,
    CreatureProfile,
    DataError,
    DataStore,
    MoveData,
    ProfileDataStore,
    TypeChart,
};

/// In-memory [`DataStore`] for testing.
///
/// Lookups are case-insensitive. Unknown names fail the same way a missing upstream resource
/// does. Individual moves can be made to fail on purpose.
pub struct TestDataStore {
    creatures: HashMap<String, CreatureData>,
    moves: HashMap<String, MoveData>,
    failing_moves: HashSet<String>,
    type_chart: Arc<TypeChart>,
    move_loads: AtomicUsize,
}

impl TestDataStore {
    pub fn new() -> Self {
        Self {
            creatures: HashMap::new(),
            moves: HashMap::new(),
            failing_moves: HashSet::new(),
            type_chart: Arc::new(TypeChart::new()),
            move_loads: AtomicUsize::new(0),
        }
    }

    pub fn with_creature(mut self, creature: CreatureData) -> Self {
        self.add_creature(creature);
        self
    }

    pub fn with_move(mut self, move_data: MoveData) -> Self {
        self.add_move(move_data);
        self
    }

    pub fn with_type_chart(mut self, type_chart: TypeChart) -> Self {
        self.type_chart = Arc::new(type_chart);
        self
    }

    pub fn add_creature(&mut self, creature: CreatureData) {
        self.creatures
            .insert(creature.name.to_lowercase(), creature.clone());
        self.creatures.insert(creature.id.to_string(), creature);
    }

    pub fn add_move(&mut self, move_data: MoveData) {
        self.moves.insert(move_data.name.to_lowercase(), move_data);
    }

    /// Makes every load of the given move fail, even if the move exists.
    pub fn fail_move(&mut self, name: &str) {
        self.failing_moves.insert(name.to_lowercase());
    }

    /// Number of move loads attempted so far.
    pub fn move_loads(&self) -> usize {
        self.move_loads.load(Ordering::SeqCst)
    }
}

impl Default for TestDataStore {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(collection: &str, name: &str) -> DataError {
    DataError::unavailable(format!("{collection}/{name}"), "status 404")
}

#[async_trait]
impl DataStore for TestDataStore {
    async fn load_creature(&self, name_or_id: &str) -> Result<CreatureData, DataError> {
        let key = name_or_id.to_lowercase();
        self.creatures
            .get(&key)
            .cloned()
            .ok_or_else(|| not_found("pokemon", &key))
    }

    async fn load_move(&self, name_or_id: &str) -> Result<MoveData, DataError> {
        self.move_loads.fetch_add(1, Ordering::SeqCst);
        let key = name_or_id.to_lowercase();
        if self.failing_moves.contains(&key) {
            return Err(DataError::unavailable(format!("move/{key}"), "status 500"));
        }
        self.moves
            .get(&key)
            .cloned()
            .ok_or_else(|| not_found("move", &key))
    }

    async fn get_type_chart(&self) -> Result<Arc<TypeChart>, DataError> {
        Ok(self.type_chart.clone())
    }
}

#[async_trait]
impl ProfileDataStore for TestDataStore {
    async fn load_profile(&self, name_or_id: &str) -> Result<CreatureProfile, DataError> {
        let creature = self.load_creature(name_or_id).await?;
        Ok(CreatureProfile {
            id: creature.id,
            evolution_chain: vec![creature.name.clone()],
            name: creature.name,
            height: 0,
            weight: 0,
            stats: creature.stats,
            types: creature.types,
            abilities: Vec::new(),
            moves: creature.moves,
            sprite: creature.sprite,
        })
    }
}
