use chrono::NaiveDateTime;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, checkbox, column, container, icon, row, text};
use cosmic::{Element, theme};

use healthplus::core::catalog;
use healthplus::core::list_view::ListViewController;
use healthplus::core::trash::{self, ItemKind, TrashedItem};

use super::{empty_state, page, page_header, search_box};
use crate::components::chip::{badge, category_chips};
use crate::fl;
use crate::message::Message;

pub struct TrashPage {
    pub list: ListViewController<TrashedItem>,
    pub now: NaiveDateTime,
}

impl TrashPage {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            list: ListViewController::new(catalog::trashed_items(now)),
            now,
        }
    }
}

pub fn trash_view(state: &TrashPage) -> Element<'static, Message> {
    let list = &state.list;
    let items = list.filtered();
    let chips: Vec<(ItemKind, String)> = ItemKind::ALL.iter().map(|k| (*k, k.chip_label().to_string())).collect();

    let mut content = column()
        .spacing(12)
        .push(page_header(
            "user-trash-symbolic",
            &fl!("route-trash"),
            &fl!("trash-count", count = list.catalog().len()),
        ))
        .push(
            container(text::caption(fl!("trash-retention", days = trash::RETENTION_DAYS)))
            .padding(8)
            .width(Length::Fill)
            .class(theme::Container::Card),
        )
        .push(search_box(fl!("trash-search"), list.query()))
        .push(category_chips(&chips, list.category(), Message::TrashFilter));

    let select_label = if list.is_all_selected() { fl!("deselect-all") } else { fl!("select-all") };
    let mut toolbar = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(button::standard(select_label).on_press(Message::ToggleSelectAll));
    if !list.selection().is_empty() {
        toolbar = toolbar
            .push(text::caption(trash::selection_summary(list.selection().len())).width(Length::Fill))
            .push(button::standard(fl!("trash-restore")).on_press(Message::ClearSelection))
            .push(button::destructive(fl!("trash-delete")).on_press(Message::ClearSelection));
    }
    content = content.push(toolbar);

    if items.is_empty() {
        return page(content.push(empty_state(fl!("trash-empty"))));
    }

    for item in items {
        content = content.push(trash_row(item, list.is_selected(item.id), state.now));
    }

    page(content)
}

fn trash_row(item: &TrashedItem, selected: bool, now: NaiveDateTime) -> Element<'static, Message> {
    let id = item.id;

    let detail = column()
        .spacing(2)
        .width(Length::Fill)
        .push(
            row()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(text::body(item.title.clone()))
                .push(badge(item.kind.label())),
        )
        .push(text::caption(item.description.clone()))
        .push(text::caption(fl!(
            "trash-deleted-by",
            ago = item.deleted_ago(now),
            by = item.deleted_by.clone()
        )))
        .push(text::caption(fl!("trash-purge-in", days = item.days_until_purge(now))));

    let line = row()
        .spacing(12)
        .align_y(Alignment::Center)
        .push(checkbox("", selected).on_toggle(move |_| Message::ToggleSelect(id)))
        .push(icon::from_name(item.kind.icon_name()).size(24).icon())
        .push(detail);

    container(line)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}
