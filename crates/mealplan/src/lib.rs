mod nutrition;
mod types;

pub use foodprep_shared::MealType;
pub use nutrition::*;
pub use types::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;

        pub use command::*;
        pub use query::*;
    }
}
