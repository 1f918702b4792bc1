//! Core-Domänentypen: Katalog, Gebäude, Kreuzungen, Belts, Layout, Port-Index.

pub mod belt;
pub mod catalog;
pub mod factory;
pub mod junction;
/// Layout-Registry
///
/// Hält alle Owner und Belts und sorgt dafür, dass Port-Belegung,
/// Pfade und Port-Index nach jeder Änderung zusammenpassen.
pub mod layout;
pub mod spatial;

pub use belt::{Belt, BeltEnd, BeltEndpoint, PortRef};
pub use catalog::{GameCatalog, ItemSpec, MachineSpec, PortSpec, RecipeIngredient, RecipeSpec};
pub use factory::Factory;
pub use junction::{Junction, JunctionBalance, JunctionKind, MIN_JUNCTION_SIZE};
pub use layout::{FactoryLayout, OwnerRegistry};
pub use spatial::{PortIndex, PortMatch};
