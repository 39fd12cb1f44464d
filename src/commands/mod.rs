mod characters;
mod common;
mod host;
mod init;
mod recommend;
mod run;

pub use characters::list_characters;
pub use common::{CommonArgs, load_catalog};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use recommend::{RecommendArgs, recommend};
pub use run::run;
