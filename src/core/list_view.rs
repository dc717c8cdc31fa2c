//! Search, category filtering and multi-select bookkeeping shared by the
//! list pages (inbox, important, patients, trash).

use std::collections::HashSet;

use uuid::Uuid;

/// A record that can be listed, searched and selected.
pub trait ListRecord {
    type Category: Copy + Eq + std::fmt::Debug;

    fn id(&self) -> Uuid;

    /// Free-text fields matched by the search box.
    fn search_fields(&self) -> Vec<&str>;

    /// The field compared by the category chips.
    fn category(&self) -> Self::Category;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: Copy + Eq> CategoryFilter<C> {
    pub fn matches(&self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }
}

/// True if the lowercased `query` is a substring of any search field.
pub fn matches_query<T: ListRecord>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records passing both the category filter and the text query, in catalog order.
pub fn filter<'a, T: ListRecord>(
    catalog: &'a [T],
    query: &str,
    category: CategoryFilter<T::Category>,
) -> Vec<&'a T> {
    catalog
        .iter()
        .filter(|r| category.matches(r.category()) && matches_query(*r, query))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<Uuid>,
}

impl SelectionSet {
    pub fn contains(&self, id: Uuid) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn toggle(&mut self, id: Uuid) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Same members as `ids`, ignoring order and duplicates.
    pub fn matches(&self, ids: &[Uuid]) -> bool {
        let other: HashSet<Uuid> = ids.iter().copied().collect();
        self.ids == other
    }

    /// Empty if the set already equals `visible`, otherwise exactly `visible`.
    pub fn toggle_all(&mut self, visible: &[Uuid]) {
        if self.matches(visible) {
            self.ids.clear();
        } else {
            self.ids = visible.iter().copied().collect();
        }
    }

    /// Drop every id not in `visible`.
    pub fn prune(&mut self, visible: &[Uuid]) {
        let keep: HashSet<Uuid> = visible.iter().copied().collect();
        self.ids.retain(|id| keep.contains(id));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Uuid> {
        self.ids.iter()
    }
}

/// One page's catalog together with its query, category chip and selection.
///
/// The selection only ever holds ids of records in the current filtered view:
/// changing the query or the category prunes it.
#[derive(Debug, Clone)]
pub struct ListViewController<T: ListRecord> {
    catalog: Vec<T>,
    query: String,
    category: CategoryFilter<T::Category>,
    selection: SelectionSet,
}

impl<T: ListRecord> ListViewController<T> {
    pub fn new(catalog: Vec<T>) -> Self {
        Self {
            catalog,
            query: String::new(),
            category: CategoryFilter::All,
            selection: SelectionSet::default(),
        }
    }

    pub fn catalog(&self) -> &[T] {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> CategoryFilter<T::Category> {
        self.category
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.prune_selection();
    }

    pub fn set_category(&mut self, category: CategoryFilter<T::Category>) {
        self.category = category;
        self.prune_selection();
    }

    pub fn filtered(&self) -> Vec<&T> {
        filter(&self.catalog, &self.query, self.category)
    }

    pub fn filtered_ids(&self) -> Vec<Uuid> {
        self.filtered().iter().map(|r| r.id()).collect()
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selection.contains(id)
    }

    /// Flip one record's membership. Ids outside the filtered view are ignored.
    pub fn toggle_select(&mut self, id: Uuid) {
        if self.filtered_ids().contains(&id) {
            self.selection.toggle(id);
        } else {
            log::debug!("Ignoring selection of hidden record {}", id);
        }
    }

    pub fn toggle_select_all(&mut self) {
        let visible = self.filtered_ids();
        self.selection.toggle_all(&visible);
    }

    /// State of the select-all checkbox.
    pub fn is_all_selected(&self) -> bool {
        let visible = self.filtered_ids();
        !visible.is_empty() && self.selection.matches(&visible)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn add(&mut self, record: T) {
        debug_assert!(self.catalog.iter().all(|r| r.id() != record.id()));
        self.catalog.push(record);
        self.prune_selection();
    }

    /// Apply `f` to the record with `id`. Returns false if there is none.
    pub fn update(&mut self, id: Uuid, f: impl FnOnce(&mut T)) -> bool {
        let Some(record) = self.catalog.iter_mut().find(|r| r.id() == id) else {
            return false;
        };
        f(record);
        self.prune_selection();
        true
    }

    fn prune_selection(&mut self) {
        let visible = self.filtered_ids();
        self.selection.prune(&visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Colour {
        Red,
        Blue,
    }

    #[derive(Debug, Clone)]
    struct Item {
        id: Uuid,
        name: String,
        note: String,
        colour: Colour,
    }

    impl ListRecord for Item {
        type Category = Colour;

        fn id(&self) -> Uuid {
            self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.note.as_str()]
        }

        fn category(&self) -> Colour {
            self.colour
        }
    }

    fn item(name: &str, note: &str, colour: Colour) -> Item {
        Item {
            id: Uuid::new_v4(),
            name: name.into(),
            note: note.into(),
            colour,
        }
    }

    fn catalog() -> Vec<Item> {
        vec![
            item("Apple", "crunchy", Colour::Red),
            item("Blueberry", "small", Colour::Blue),
            item("Cherry", "Small stone", Colour::Red),
            item("Plum", "stone fruit", Colour::Blue),
        ]
    }

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn empty_query_and_all_returns_catalog_in_order() {
        let items = catalog();
        let result = filter(&items, "", CategoryFilter::All);
        assert_eq!(names(&result), vec!["Apple", "Blueberry", "Cherry", "Plum"]);
    }

    #[test]
    fn query_matches_any_field_case_insensitively() {
        let items = catalog();
        let result = filter(&items, "SMALL", CategoryFilter::All);
        assert_eq!(names(&result), vec!["Blueberry", "Cherry"]);
        let result = filter(&items, "app", CategoryFilter::All);
        assert_eq!(names(&result), vec!["Apple"]);
    }

    #[test]
    fn category_and_query_are_combined() {
        let items = catalog();
        let result = filter(&items, "stone", CategoryFilter::Only(Colour::Blue));
        assert_eq!(names(&result), vec!["Plum"]);
        let result = filter(&items, "", CategoryFilter::Only(Colour::Red));
        assert_eq!(names(&result), vec!["Apple", "Cherry"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let items = catalog();
        let once: Vec<Item> = filter(&items, "e", CategoryFilter::Only(Colour::Red))
            .into_iter()
            .cloned()
            .collect();
        let twice = filter(&once, "e", CategoryFilter::Only(Colour::Red));
        assert_eq!(names(&twice), names(&once.iter().collect::<Vec<_>>()));
    }

    #[test]
    fn toggle_select_twice_restores() {
        let mut view = ListViewController::new(catalog());
        let id = view.catalog()[1].id;
        view.toggle_select(id);
        assert!(view.is_selected(id));
        view.toggle_select(id);
        assert!(view.selection().is_empty());
    }

    #[test]
    fn toggle_select_ignores_hidden_records() {
        let mut view = ListViewController::new(catalog());
        let hidden = view.catalog()[0].id;
        view.set_category(CategoryFilter::Only(Colour::Blue));
        view.toggle_select(hidden);
        assert!(view.selection().is_empty());
    }

    #[test]
    fn toggle_select_all_twice_from_empty_is_empty() {
        let mut view = ListViewController::new(catalog());
        view.toggle_select_all();
        assert_eq!(view.selection().len(), 4);
        assert!(view.is_all_selected());
        view.toggle_select_all();
        assert!(view.selection().is_empty());
        assert!(!view.is_all_selected());
    }

    #[test]
    fn toggle_select_all_from_partial_selects_visible() {
        let mut view = ListViewController::new(catalog());
        let first = view.catalog()[0].id;
        view.toggle_select(first);
        view.toggle_select_all();
        assert!(view.selection().matches(&view.filtered_ids()));
    }

    #[test]
    fn narrowing_filter_prunes_selection() {
        let mut view = ListViewController::new(catalog());
        view.toggle_select_all();
        view.set_query("stone");
        assert_eq!(view.selection().len(), 2);
        assert!(view.selection().iter().all(|id| view.filtered_ids().contains(id)));
        // Widening again does not bring the pruned ids back.
        view.set_query("");
        assert_eq!(view.selection().len(), 2);
        assert!(!view.is_all_selected());
    }

    #[test]
    fn empty_view_is_never_all_selected() {
        let mut view = ListViewController::new(catalog());
        view.set_query("nothing matches this");
        view.toggle_select_all();
        assert!(view.selection().is_empty());
        assert!(!view.is_all_selected());
    }

    #[test]
    fn add_appends_and_update_finds_by_id() {
        let mut view = ListViewController::new(catalog());
        let extra = item("Damson", "sour", Colour::Blue);
        let id = extra.id;
        view.add(extra);
        assert_eq!(view.catalog().last().map(|i| i.id), Some(id));

        assert!(view.update(id, |i| i.colour = Colour::Red));
        assert_eq!(view.catalog()[4].colour, Colour::Red);
        assert!(!view.update(Uuid::new_v4(), |i| i.colour = Colour::Red));
    }

    #[test]
    fn update_that_hides_a_selected_record_drops_it() {
        let mut view = ListViewController::new(catalog());
        let id = view.catalog()[0].id;
        view.set_category(CategoryFilter::Only(Colour::Red));
        view.toggle_select(id);
        view.update(id, |i| i.colour = Colour::Blue);
        assert!(!view.is_selected(id));
    }
}
