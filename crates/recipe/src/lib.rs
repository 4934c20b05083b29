mod ingredients;

pub use foodprep_shared::RecipeCategory;
pub use ingredients::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;

        pub use command::*;
        pub use query::*;
    }
}
