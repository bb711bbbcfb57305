//! Pantry repository tests
//! 食品柜仓库测试

mod common;

use std::sync::Arc;

use common::{memory_store, next_within, ManualClock};
use pb_core::config::StoreLimits;
use pb_core::pantry::{Category, NewPantryItem, PantryItemPatch};
use pb_core::ports::PantryRepositoryPort;
use pb_core::PantryItemId;
use pb_infra::DocumentPantryRepository;

fn repo(clock: Arc<ManualClock>) -> DocumentPantryRepository {
    DocumentPantryRepository::new(memory_store(clock), StoreLimits::default())
}

#[tokio::test]
async fn test_add_stamps_updated_at_and_watch_all_orders_by_name() {
    let clock = ManualClock::at(5_000);
    let repo = repo(clock.clone());

    let milk = repo
        .add(NewPantryItem::named("Milk").in_category(Category::Dairy))
        .await
        .unwrap();
    repo.add(NewPantryItem::named("Apple")).await.unwrap();

    let mut live = repo.watch_all().await.unwrap();
    let items = next_within(&mut live).await;

    let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Milk"]);
    assert_eq!(items[1].id, milk);
    assert_eq!(items[1].updated_at_ms, 5_000);
    assert_eq!(items[1].category(), "Dairy");
}

#[tokio::test]
async fn test_watch_by_tag() {
    let repo = repo(ManualClock::at(0));
    repo.add(NewPantryItem::named("Salmon").in_category(Category::Fish))
        .await
        .unwrap();
    repo.add(NewPantryItem::named("Cod").in_category(Category::Fish))
        .await
        .unwrap();
    repo.add(NewPantryItem::named("Oats").in_category(Category::GrainsAndPasta))
        .await
        .unwrap();

    let mut live = repo.watch_by_tag("Fish").await.unwrap();
    let names: Vec<_> = next_within(&mut live)
        .await
        .into_iter()
        .map(|i| i.name)
        .collect();

    assert_eq!(names, vec!["Cod".to_string(), "Salmon".to_string()]);
}

#[tokio::test]
async fn test_update_patches_and_restamps() {
    let clock = ManualClock::at(1_000);
    let repo = repo(clock.clone());
    let id = repo
        .add(NewPantryItem {
            name: "Yoghurt".to_string(),
            quantity: Some(2.0),
            ..Default::default()
        })
        .await
        .unwrap();

    clock.set(2_000);
    repo.update(&id, PantryItemPatch::rename_and_categorize("Greek yoghurt", Category::Dairy))
        .await
        .unwrap();

    let item = repo.watch_item(&id).await.unwrap().latest().expect("item exists");
    assert_eq!(item.name, "Greek yoghurt");
    assert_eq!(item.tags, vec!["Dairy".to_string()]);
    assert_eq!(item.quantity, Some(2.0));
    assert_eq!(item.updated_at_ms, 2_000);
}

#[tokio::test]
async fn test_update_of_missing_item_fails_but_upsert_creates() {
    let repo = repo(ManualClock::at(0));
    let id = PantryItemId::from("ghost");

    assert!(repo.update(&id, PantryItemPatch::default()).await.is_err());

    let patch = PantryItemPatch {
        name: Some("Honey".to_string()),
        ..Default::default()
    };
    repo.upsert(&id, patch).await.unwrap();

    let item = repo.watch_item(&id).await.unwrap().latest().expect("upsert creates");
    assert_eq!(item.name, "Honey");
}

#[tokio::test]
async fn test_remove_and_remove_many() {
    let repo = repo(ManualClock::at(0));
    let a = repo.add(NewPantryItem::named("A")).await.unwrap();
    let b = repo.add(NewPantryItem::named("B")).await.unwrap();
    let c = repo.add(NewPantryItem::named("C")).await.unwrap();

    repo.remove(&a).await.unwrap();
    repo.remove_many(&[]).await.unwrap();
    repo.remove_many(&[b, c.clone()]).await.unwrap();

    let live = repo.watch_all().await.unwrap();
    assert!(live.latest().is_empty());
    assert!(repo.watch_item(&c).await.unwrap().latest().is_none());
}

#[tokio::test]
async fn test_keep_latest_deletes_older_items() {
    let clock = ManualClock::at(0);
    let repo = repo(clock.clone());
    for (ms, name) in [(10, "oldest"), (20, "old"), (30, "new"), (40, "newest")] {
        clock.set(ms);
        repo.add(NewPantryItem::named(name)).await.unwrap();
    }

    let removed = repo.keep_latest(2).await.unwrap();

    assert_eq!(removed, 2);
    let names: Vec<_> = repo
        .watch_all()
        .await
        .unwrap()
        .latest()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, vec!["new".to_string(), "newest".to_string()]);
}

#[tokio::test]
async fn test_keep_latest_leaves_items_outside_scan_window() {
    let clock = ManualClock::at(0);
    let limits = StoreLimits {
        keep_latest_scan_limit: 3,
        ..StoreLimits::default()
    };
    let repo = DocumentPantryRepository::new(memory_store(clock.clone()), limits);
    for (ms, name) in [(10, "a"), (20, "b"), (30, "c"), (40, "d"), (50, "e")] {
        clock.set(ms);
        repo.add(NewPantryItem::named(name)).await.unwrap();
    }

    let removed = repo.keep_latest(1).await.unwrap();

    assert_eq!(removed, 2);
    let names: Vec<_> = repo
        .watch_all()
        .await
        .unwrap()
        .latest()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, vec!["a", "b", "e"]);
}
