use crate::ui::app::App;
use crate::ui::categories::render_category_table;
use crate::ui::category_form::render_category_form;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::notification::render_notification;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, animation_tick: usize) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.server(), app.categories());
    frame.render_widget(header_widget.widget(animation_tick), header);

    frame.render_widget(Clear, body);
    render_category_table(frame, body, app.categories(), app.selection());

    let footer_widget = Footer::new(app.form().is_open());
    frame.render_widget(footer_widget.widget(footer), footer);

    render_category_form(frame, app.form());
    render_notification(frame, app.notifications(), area);
}
