use std::sync::Arc;

use log::info;
use pokeproxy_data::{
    CreatureData,
    DamageClass,
    MoveData,
    TypeChart,
};
use pokeproxy_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    CombatStats,
    StatusKind,
    apply_status_chance,
    calc_damage,
    critical_hit_modifier,
    same_type_attack_bonus,
};

/// The outcome of a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    /// Name of the only creature left standing; [`None`] on a draw.
    pub winner: Option<String>,
    /// Number of turns played.
    pub turns: u32,
    /// Human-readable battle log.
    pub log: Vec<String>,
}

/// One side of a battle.
#[derive(Debug, Clone)]
pub struct BattleSide {
    creature: CreatureData,
    stats: CombatStats,
    hp: u32,
    status: Option<StatusKind>,
    selected_move: MoveData,
}

impl BattleSide {
    /// Creates a side at full HP with no status.
    pub fn new(creature: CreatureData, selected_move: MoveData, level: u32) -> Self {
        let stats = CombatStats::new(&creature, level);
        Self {
            creature,
            hp: stats.max_hp,
            stats,
            status: None,
            selected_move,
        }
    }

    pub fn name(&self) -> &str {
        &self.creature.name
    }

    pub fn creature(&self) -> &CreatureData {
        &self.creature
    }

    pub fn stats(&self) -> &CombatStats {
        &self.stats
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn status(&self) -> Option<StatusKind> {
        self.status
    }

    pub fn selected_move(&self) -> &MoveData {
        &self.selected_move
    }

    pub fn fainted(&self) -> bool {
        self.hp == 0
    }

    fn effective_speed(&self) -> f64 {
        match self.status {
            Some(StatusKind::Paralysis) => self.stats.speed as f64 / 2.0,
            _ => self.stats.speed as f64,
        }
    }

    fn take_damage(&mut self, damage: u32) {
        self.hp = self.hp.saturating_sub(damage);
    }
}

/// A single battle between two sides.
///
/// Side 0 is the attacker and side 1 the defender. Both sides use their selected move every turn.
pub struct Battle {
    sides: [BattleSide; 2],
    type_chart: Arc<TypeChart>,
    level: u32,
    max_turns: u32,
    turn: u32,
    log: Vec<String>,
    prng: Box<dyn PseudoRandomNumberGenerator>,
}

impl Battle {
    pub fn new(
        attacker: BattleSide,
        defender: BattleSide,
        type_chart: Arc<TypeChart>,
        level: u32,
        max_turns: u32,
        prng: Box<dyn PseudoRandomNumberGenerator>,
    ) -> Self {
        Self {
            sides: [attacker, defender],
            type_chart,
            level,
            max_turns,
            turn: 0,
            log: Vec::new(),
            prng,
        }
    }

    pub fn side(&self, side: usize) -> &BattleSide {
        &self.sides[side]
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn ended(&self) -> bool {
        self.sides.iter().any(|side| side.fainted())
    }

    pub fn all_logs(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(|line| line.as_str())
    }

    fn log(&mut self, line: String) {
        self.log.push(line);
    }

    /// Plays turns until a side faints or the turn budget runs out.
    pub fn run(mut self) -> BattleOutcome {
        while self.turn < self.max_turns && !self.ended() {
            self.play_turn();
        }
        let outcome = BattleOutcome {
            winner: self.winner(),
            turns: self.turn,
            log: self.log,
        };
        info!(
            "battle between {} and {} ended after {} turns, winner: {}",
            self.sides[0].name(),
            self.sides[1].name(),
            outcome.turns,
            outcome.winner.as_deref().unwrap_or("none"),
        );
        outcome
    }

    /// Plays a single turn: both actions in speed order, then end-of-turn effects.
    pub fn play_turn(&mut self) {
        self.turn += 1;
        self.log(format!("-- Turn {} --", self.turn));
        for user in self.action_order() {
            if self.ended() {
                break;
            }
            self.take_action(user);
        }
        for side in 0..self.sides.len() {
            self.end_of_turn(side);
        }
    }

    fn action_order(&self) -> [usize; 2] {
        if self.sides[0].effective_speed() >= self.sides[1].effective_speed() {
            [0, 1]
        } else {
            [1, 0]
        }
    }

    fn take_action(&mut self, user: usize) {
        let target = 1 - user;
        let user_name = self.sides[user].name().to_owned();
        let target_name = self.sides[target].name().to_owned();
        let move_data = self.sides[user].selected_move.clone();

        if self.sides[user].status == Some(StatusKind::Paralysis)
            && rand_util::chance(self.prng.as_mut(), 1, 4)
        {
            self.log(format!("{user_name} is paralyzed and can't move!"));
            return;
        }

        if let Some(accuracy) = move_data.accuracy {
            if rand_util::roll_percent(self.prng.as_mut()) > accuracy.max(1) as u64 {
                self.log(format!("{user_name} used {} but it missed!", move_data.name));
                return;
            }
        }

        let power = move_data.base_power();
        if power > 0 {
            let (damage, effectiveness) = self.calculate_damage(user, &move_data);
            self.sides[target].take_damage(damage);
            self.log(format!(
                "{user_name} used {} -> -{damage} (effectiveness x{effectiveness:?})",
                move_data.name
            ));
        } else {
            self.log(format!(
                "{user_name} used {} (no direct damage in this sim)",
                move_data.name
            ));
        }

        let current = self.sides[target].status;
        let status = apply_status_chance(self.prng.as_mut(), &move_data, current);
        if let Some(status) = status {
            if current != Some(status) {
                self.sides[target].status = Some(status);
                self.log(format!("{target_name} is now {status}!"));
            }
        }
    }

    /// Calculates damage dealt by the user to its opponent, along with the type effectiveness
    /// multiplier applied.
    fn calculate_damage(&mut self, user: usize, move_data: &MoveData) -> (u32, f64) {
        let target = 1 - user;
        let attacker = &self.sides[user];
        let defender = &self.sides[target];

        let physical = move_data.damage_class == Some(DamageClass::Physical);
        let (attack, defense) = if physical {
            (attacker.stats.attack, defender.stats.attack)
        } else {
            (attacker.stats.special_attack, defender.stats.special_attack)
        };
        let mut attack = attack as f64;
        if physical && attacker.status == Some(StatusKind::Burn) {
            attack /= 2.0;
        }

        let stab = same_type_attack_bonus(&attacker.creature, move_data);
        let effectiveness = self
            .type_chart
            .multiplier(&move_data.move_type, &defender.creature.types);
        let defense = defense as f64;

        let crit = critical_hit_modifier(self.prng.as_mut());
        let damage = calc_damage(
            self.prng.as_mut(),
            self.level,
            move_data.base_power(),
            attack,
            defense,
            stab * effectiveness * crit,
        );
        (damage, effectiveness)
    }

    fn end_of_turn(&mut self, side: usize) {
        let side = &mut self.sides[side];
        if side.fainted() {
            return;
        }
        let line = match side.status {
            Some(StatusKind::Burn) => {
                let damage = (side.stats.max_hp / 16).max(1);
                side.take_damage(damage);
                format!("{} is hurt by its burn for {damage} HP.", side.name())
            }
            Some(StatusKind::Poison) => {
                let damage = (side.stats.max_hp / 8).max(1);
                side.take_damage(damage);
                format!("{} is hurt by poison for {damage} HP.", side.name())
            }
            _ => return,
        };
        self.log(line);
    }

    fn winner(&self) -> Option<String> {
        match (self.sides[0].fainted(), self.sides[1].fainted()) {
            (false, true) => Some(self.sides[0].name().to_owned()),
            (true, false) => Some(self.sides[1].name().to_owned()),
            _ => None,
        }
    }
}
