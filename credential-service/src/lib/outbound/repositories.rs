pub mod memory;
pub mod postgres;

pub use memory::MemoryAccountRepository;
pub use postgres::PostgresAccountRepository;
