use ellipsis_chips::app::App;
use ellipsis_chips::chips::MAX_HEIGHT;
use ellipsis_chips::i18n::Catalog;
use ratatui::layout::Size;

/// Build an `App` for integration testing.
/// No terminal, no event stream -- just state.
pub fn test_app(labels: &[&str], width: u16) -> App {
    App::new(owned(labels), Catalog::builtin(), Size::new(width, 24), MAX_HEIGHT)
}

pub fn owned(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| (*s).to_owned()).collect()
}

/// Labels of the chips currently displayed, in order.
pub fn shown(app: &App) -> Vec<String> {
    app.chip_list.host().visible_chips().map(|chip| chip.label.clone()).collect()
}

pub fn indicator(app: &App) -> Option<String> {
    let tree = app.chip_list.host();
    tree.indicator_visible().then(|| tree.indicator_text().unwrap_or_default().to_owned())
}
