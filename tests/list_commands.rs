use shoplistbill::{
    Command, CommandError, CommandOutcome, DraftQuantity, ItemDraft, ItemForm, ListError,
    ListStore, Unit, ValidationError, dispatch,
    storage::{ItemRepository, KeyValueStore, MemoryStore, StorageError},
};

fn draft(name: &str, qty: f64, unit: Unit, price: f64, per: f64, per_unit: Unit) -> ItemDraft {
    ItemDraft::new(
        name,
        DraftQuantity::new(qty, Some(unit)),
        price,
        DraftQuantity::new(per, Some(per_unit)),
    )
}

fn submit(list: &mut ListStore, repo: &ItemRepository<&MemoryStore>, d: ItemDraft) {
    dispatch(list, repo, Command::Submit(d)).unwrap();
}

fn names(list: &ListStore) -> Vec<&str> {
    list.items().iter().map(|i| i.name.as_str()).collect()
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io(std::io::Error::other("storage unavailable")))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("quota exceeded")))
    }

    fn delete(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("storage unavailable")))
    }
}

#[test]
fn submit_appends_and_saves() {
    let store = MemoryStore::new();
    let repo = ItemRepository::new(&store);
    let mut list = ListStore::new();

    let outcome = dispatch(
        &mut list,
        &repo,
        Command::Submit(draft("Rice", 2.0, Unit::Kg, 100.0, 1.0, Unit::Kg)),
    )
    .unwrap();

    assert_eq!(outcome, CommandOutcome::Added { index: 0 });
    assert_eq!(list.get(0).unwrap().total, 200.0);
    assert_eq!(repo.try_load().unwrap(), list.items());
}

#[test]
fn milk_priced_per_litre() {
    let store = MemoryStore::new();
    let repo = ItemRepository::new(&store);
    let mut list = ListStore::new();

    submit(&mut list, &repo, draft("Milk", 500.0, Unit::Ml, 60.0, 1.0, Unit::L));
    assert_eq!(list.get(0).unwrap().total, 30.0);
    assert!((list.total() - 30.0).abs() < 1e-9);
}

#[test]
fn rejected_submission_leaves_list_untouched() {
    let store = MemoryStore::new();
    let repo = ItemRepository::new(&store);
    let mut list = ListStore::new();
    submit(&mut list, &repo, draft("Rice", 2.0, Unit::Kg, 100.0, 1.0, Unit::Kg));
    list.begin_edit(0).unwrap();

    let result = dispatch(
        &mut list,
        &repo,
        Command::Submit(draft("Oil", 1.0, Unit::Kg, 150.0, 1.0, Unit::L)),
    );
    assert_eq!(
        result,
        Err(CommandError::Validation(ValidationError::DimensionMismatch))
    );

    let result = dispatch(
        &mut list,
        &repo,
        Command::Submit(draft("Oil", 1.0, Unit::L, 0.0, 1.0, Unit::L)),
    );
    assert_eq!(
        result,
        Err(CommandError::Validation(ValidationError::InvalidPrice))
    );

    assert_eq!(names(&list), ["Rice"]);
    assert_eq!(list.edit_cursor(), Some(0));
}

#[test]
fn edit_replaces_in_place() {
    let store = MemoryStore::new();
    let repo = ItemRepository::new(&store);
    let mut list = ListStore::new();
    submit(&mut list, &repo, draft("Rice", 2.0, Unit::Kg, 100.0, 1.0, Unit::Kg));
    submit(&mut list, &repo, draft("Dal", 1.0, Unit::Kg, 120.0, 1.0, Unit::Kg));
    submit(&mut list, &repo, draft("Salt", 1.0, Unit::Kg, 20.0, 1.0, Unit::Kg));

    dispatch(&mut list, &repo, Command::BeginEdit(1)).unwrap();
    let outcome = dispatch(
        &mut list,
        &repo,
        Command::Submit(draft("Toor Dal", 2.0, Unit::Kg, 130.0, 1.0, Unit::Kg)),
    )
    .unwrap();

    assert_eq!(outcome, CommandOutcome::Replaced { index: 1 });
    assert_eq!(names(&list), ["Rice", "Toor Dal", "Salt"]);
    assert_eq!(list.get(1).unwrap().total, 260.0);
    assert_eq!(list.edit_cursor(), None);
    assert_eq!(repo.try_load().unwrap(), list.items());
}

#[test]
fn cancelled_edit_appends_next_submission() {
    let store = MemoryStore::new();
    let repo = ItemRepository::new(&store);
    let mut list = ListStore::new();
    submit(&mut list, &repo, draft("Rice", 2.0, Unit::Kg, 100.0, 1.0, Unit::Kg));

    dispatch(&mut list, &repo, Command::BeginEdit(0)).unwrap();
    assert_eq!(
        dispatch(&mut list, &repo, Command::CancelEdit).unwrap(),
        CommandOutcome::EditCancelled
    );
    submit(&mut list, &repo, draft("Dal", 1.0, Unit::Kg, 120.0, 1.0, Unit::Kg));

    assert_eq!(names(&list), ["Rice", "Dal"]);
}

#[test]
fn delete_before_edited_row_keeps_edit_on_same_item() {
    let store = MemoryStore::new();
    let repo = ItemRepository::new(&store);
    let mut list = ListStore::new();
    submit(&mut list, &repo, draft("Rice", 2.0, Unit::Kg, 100.0, 1.0, Unit::Kg));
    submit(&mut list, &repo, draft("Dal", 1.0, Unit::Kg, 120.0, 1.0, Unit::Kg));
    submit(&mut list, &repo, draft("Salt", 1.0, Unit::Kg, 20.0, 1.0, Unit::Kg));

    dispatch(&mut list, &repo, Command::BeginEdit(1)).unwrap();
    let outcome = dispatch(&mut list, &repo, Command::Delete(0)).unwrap();
    assert!(matches!(outcome, CommandOutcome::Deleted { index: 0, ref item } if item.name == "Rice"));

    assert_eq!(list.edit_cursor(), Some(0));
    assert_eq!(list.editing().unwrap().1.name, "Dal");

    submit(&mut list, &repo, draft("Moong Dal", 1.0, Unit::Kg, 110.0, 1.0, Unit::Kg));
    assert_eq!(names(&list), ["Moong Dal", "Salt"]);
}

#[test]
fn delete_out_of_range_is_reported() {
    let store = MemoryStore::new();
    let repo = ItemRepository::new(&store);
    let mut list = ListStore::new();
    submit(&mut list, &repo, draft("Rice", 2.0, Unit::Kg, 100.0, 1.0, Unit::Kg));

    assert_eq!(
        dispatch(&mut list, &repo, Command::Delete(1)),
        Err(CommandError::List(ListError::IndexOutOfRange { index: 1, len: 1 }))
    );
    assert_eq!(
        dispatch(&mut list, &repo, Command::BeginEdit(4)),
        Err(CommandError::List(ListError::IndexOutOfRange { index: 4, len: 1 }))
    );
}

#[test]
fn clear_all_wipes_memory_and_storage() {
    let store = MemoryStore::new();
    let repo = ItemRepository::new(&store);
    let mut list = ListStore::new();
    submit(&mut list, &repo, draft("Rice", 2.0, Unit::Kg, 100.0, 1.0, Unit::Kg));
    dispatch(&mut list, &repo, Command::BeginEdit(0)).unwrap();

    assert_eq!(
        dispatch(&mut list, &repo, Command::ClearAll).unwrap(),
        CommandOutcome::Cleared
    );
    assert!(list.is_empty());
    assert_eq!(list.edit_cursor(), None);
    assert_eq!(store.get(shoplistbill::ITEMS_KEY).unwrap(), None);
    assert!(repo.load().is_empty());
}

#[test]
fn storage_failures_do_not_block_changes() {
    let repo = ItemRepository::new(BrokenStore);
    let mut list = ListStore::from_items(repo.load());
    assert!(list.is_empty());

    dispatch(
        &mut list,
        &repo,
        Command::Submit(draft("Rice", 2.0, Unit::Kg, 100.0, 1.0, Unit::Kg)),
    )
    .unwrap();
    assert_eq!(list.len(), 1);

    dispatch(&mut list, &repo, Command::Delete(0)).unwrap();
    assert!(list.is_empty());

    dispatch(&mut list, &repo, Command::ClearAll).unwrap();
}

#[test]
fn form_text_is_coerced_before_validation() {
    let store = MemoryStore::new();
    let repo = ItemRepository::new(&store);
    let mut list = ListStore::new();

    let form = ItemForm {
        name: "Rice".into(),
        qty_main: "two".into(),
        unit_main: "kg".into(),
        price_amount: "100".into(),
        price_basis_qty: "1".into(),
        price_basis_unit: "kg".into(),
        ..Default::default()
    };
    assert_eq!(
        dispatch(&mut list, &repo, Command::Submit(form.into_draft())),
        Err(CommandError::Validation(ValidationError::MissingQuantity))
    );

    let form = ItemForm {
        name: "Rice".into(),
        qty_main: "2".into(),
        unit_main: "kg".into(),
        price_amount: "₹100".into(),
        price_basis_qty: "1".into(),
        price_basis_unit: "kg".into(),
        ..Default::default()
    };
    assert_eq!(
        dispatch(&mut list, &repo, Command::Submit(form.into_draft())),
        Err(CommandError::Validation(ValidationError::InvalidPrice))
    );

    let form = ItemForm {
        name: "Flour".into(),
        qty_main: "2".into(),
        unit_main: "kg".into(),
        qty_sub: "500".into(),
        unit_sub: "g".into(),
        price_amount: "40".into(),
        price_basis_qty: "".into(),
        price_basis_unit: "kg".into(),
    };
    dispatch(&mut list, &repo, Command::Submit(form.into_draft())).unwrap();
    assert_eq!(list.get(0).unwrap().total, 100.0);
}
