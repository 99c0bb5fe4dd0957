mod data_store;
mod fixtures;
mod log_assert;
mod rng;
mod setup;

pub use data_store::TestDataStore;
pub use fixtures::{
    creature,
    damaging_move,
    status_move,
    type_chart,
};
pub use log_assert::{
    assert_logs_eq,
    turn_blocks,
};
pub use rng::{
    ControlledRandomNumberGenerator,
    fake_value_for_percent_roll,
};
pub use setup::setup_test_environment;
