pub mod annotation;
pub mod cache;
pub mod category;
pub mod clock;
pub mod config;
pub mod counter;
pub mod dispatch;
pub mod error;
pub mod item;
pub mod storage;
pub mod toolstats;

pub use annotation::{AnnotationSynchronizer, SyncOutcome, render_template};
pub use cache::{CategoryCache, ReloadOutcome};
pub use category::Category;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, ConfigSource, HelpTopic};
pub use counter::CounterStore;
pub use dispatch::{EventKind, TrackingDispatcher, WorldEvent};
pub use error::{Error, Result};
pub use item::{DataContainer, Item, ItemMeta, Material};
pub use storage::{load_item, save_item};
pub use toolstats::{CategoryRefresh, CategoryStats, RefreshReport, StatsReport, ToolStats};
