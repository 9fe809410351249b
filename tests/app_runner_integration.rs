use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::Mutex;

use folio::{
    core::{markers::Marker, widget::WidgetId},
    infrastructure::{
        config::Config,
        tui::{test::TestTui, Event, TuiLike},
    },
    integration::app_runner::AppRunner,
};

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

async fn mounted(
    width: u16,
    height: u16,
    events: Vec<Event>,
) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
    let test = Arc::new(Mutex::new(TestTui::with_events(width, height, events)?));
    let tui: Arc<Mutex<dyn TuiLike>> = Arc::clone(&test) as Arc<Mutex<dyn TuiLike>>;
    let mut runner = AppRunner::new(Config::default(), tui).await?;
    runner.advance(Duration::from_secs(2));
    Ok((runner, test))
}

#[tokio::test]
async fn test_keyboard_opens_projects_overlay() -> Result<()> {
    let (mut runner, test) = mounted(120, 40, vec![key('3'), Event::Render]).await?;
    runner.run().await?;

    assert_eq!(runner.state().topmost_overlay(), Some(WidgetId::Projects));
    assert!(runner.state().body.has(Marker::ScrollLock));
    let tui = test.lock().await;
    assert!(tui.contains("Webs"));
    assert!(tui.contains("scroll-lock"));
    Ok(())
}

#[tokio::test]
async fn test_escape_then_backdrop_click() -> Result<()> {
    let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()));
    let (mut runner, _test) = mounted(
        120,
        40,
        vec![key('1'), Event::Render, esc, key('2'), Event::Render, click(0, 0)],
    )
    .await?;
    runner.run().await?;

    assert_eq!(runner.state().topmost_overlay(), None);
    assert!(!runner.state().body.has(Marker::ScrollLock));
    Ok(())
}

#[tokio::test]
async fn test_resize_to_narrow_stops_cursor_suppression() -> Result<()> {
    let (mut runner, test) = mounted(120, 40, vec![Event::Resize(60, 30)]).await?;
    assert!(runner.state().body.has(Marker::CursorSuppression));

    runner.run().await?;

    assert!(!runner.state().body.has(Marker::CursorSuppression));
    assert!(!runner.state().pointer.is_active());
    assert!(test.lock().await.draw_count() >= 2);
    Ok(())
}
