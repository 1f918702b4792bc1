//! Factory-Belt-Sandbox Library.
//! Spielschicht (Katalog, Owner, Layout, Use-Cases) als Library exportiert für
//! CLI, Tests und Benchmarks. Routing und Geometrie liegen in `factory_belt_engine`.

pub mod app;
pub mod core;
pub mod io;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use core::{
    Belt, BeltEnd, BeltEndpoint, Factory, FactoryLayout, GameCatalog, Junction, JunctionBalance,
    JunctionKind, PortRef,
};
pub use io::{parse_layout, write_layout, RouteReport};
pub use shared::SandboxOptions;
