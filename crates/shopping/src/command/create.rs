use serde::Deserialize;
use validator::Validate;

use crate::ShoppingItemRow;

#[derive(Validate, Deserialize, Clone, Debug, Default)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 200))]
    pub item: String,
}

impl super::Command {
    pub async fn create(
        &self,
        input: CreateInput,
        request_by: impl Into<String>,
    ) -> foodprep_shared::Result<ShoppingItemRow> {
        let input = CreateInput {
            item: input.item.trim().to_owned(),
        };
        input.validate()?;

        self.upsert_item(input.item, request_by).await
    }
}
