use super::config::AppPhase;
use super::controller::SessionController;
use crate::events::Event;
use crate::message::MessageReceiver;

/// Feed messages to the controller until the current session leaves
/// `Session`, reporting every event to `on_event`.
///
/// Returns immediately if no session is running. Returns the terminal event,
/// or `None` if the channel closed first.
pub async fn drive_session<F>(
    controller: &mut SessionController,
    rx: &mut MessageReceiver,
    mut on_event: F,
) -> Option<Event>
where
    F: FnMut(&Event),
{
    while controller.phase() == AppPhase::Session {
        let message = rx.recv().await?;
        if let Some(event) = controller.handle(message) {
            on_event(&event);
            if event.is_terminal() {
                return Some(event);
            }
        }
    }
    None
}
