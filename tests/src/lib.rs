use griddle::Connection;

/// Opens a fresh in-memory database for one test scenario.
pub fn connection() -> Connection {
    let _ = env_logger::builder().is_test(true).try_init();
    Connection::open_in_memory().expect("failed to open in-memory database")
}
