//! Application runtime and use case accessor.

use pb_app::usecases::{
    DeleteIdea, GetIdeaDetail, ListIdeas, PruneIdeas, PrunePantry, QuickAddPantryItem,
    RemovePantryItem, RemovePantryItems, ReplaceIdeaIngredients, SaveIdea, SavePantryItemEdit,
    WatchPantryGroups, WatchPantryItem, WatchPantryItems, WatchPantrySuggestions,
};
use pb_app::AppDeps;
use pb_core::config::AppConfig;

/// Wired dependencies plus the configuration they were built from.
pub struct AppRuntime {
    pub deps: AppDeps,
    pub config: AppConfig,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, config: AppConfig) -> Self {
        Self { deps, config }
    }

    /// Get use cases accessor.
    /// 获取用例访问器。
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Use case accessor for AppRuntime.
///
/// Callers ask for a use case by name and never see which ports it needs;
/// all port-to-use-case wiring lives here.
/// 所有端口到用例的连接集中在此处。
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn watch_pantry_groups(&self) -> WatchPantryGroups {
        WatchPantryGroups::new(self.runtime.deps.pantry_repo.clone())
    }

    pub fn watch_pantry_items(&self) -> WatchPantryItems {
        WatchPantryItems::new(self.runtime.deps.pantry_repo.clone())
    }

    pub fn watch_pantry_item(&self) -> WatchPantryItem {
        WatchPantryItem::new(self.runtime.deps.pantry_repo.clone())
    }

    pub fn quick_add_pantry_item(&self) -> QuickAddPantryItem {
        QuickAddPantryItem::new(self.runtime.deps.pantry_repo.clone())
    }

    pub fn save_pantry_item_edit(&self) -> SavePantryItemEdit {
        SavePantryItemEdit::new(self.runtime.deps.pantry_repo.clone())
    }

    pub fn remove_pantry_item(&self) -> RemovePantryItem {
        RemovePantryItem::new(self.runtime.deps.pantry_repo.clone())
    }

    pub fn remove_pantry_items(&self) -> RemovePantryItems {
        RemovePantryItems::new(self.runtime.deps.pantry_repo.clone())
    }

    pub fn prune_pantry(&self) -> PrunePantry {
        PrunePantry::new(self.runtime.deps.pantry_repo.clone())
    }

    pub fn list_ideas(&self) -> ListIdeas {
        ListIdeas::new(self.runtime.deps.idea_repo.clone())
    }

    pub fn get_idea_detail(&self) -> GetIdeaDetail {
        GetIdeaDetail::new(self.runtime.deps.idea_repo.clone())
    }

    pub fn save_idea(&self) -> SaveIdea {
        SaveIdea::new(self.runtime.deps.idea_repo.clone())
    }

    pub fn replace_idea_ingredients(&self) -> ReplaceIdeaIngredients {
        ReplaceIdeaIngredients::new(self.runtime.deps.idea_repo.clone())
    }

    pub fn delete_idea(&self) -> DeleteIdea {
        DeleteIdea::new(self.runtime.deps.idea_repo.clone())
    }

    pub fn prune_ideas(&self) -> PruneIdeas {
        PruneIdeas::new(self.runtime.deps.idea_repo.clone())
    }

    /// Pantry names offered as ingredient suggestions.
    pub fn watch_pantry_suggestions(&self) -> WatchPantrySuggestions {
        WatchPantrySuggestions::new(self.runtime.deps.pantry_repo.clone())
    }
}
