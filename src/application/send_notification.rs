//! Send-notification use case

use crate::domain::{Level, NotificationRequest, NotificationResponse, ValidationError};

use super::ports::ToastRenderer;

/// Observable stages of a call, emitted for logging.
///
/// The service owns what gets reported; the CLI layer decides presentation.
#[derive(Debug, Clone, Copy)]
pub enum ServiceEvent<'a> {
    /// A request arrived, before any validation
    Received {
        title: &'a str,
        message: &'a str,
        level: Level,
    },
    /// Validation turned the request away
    Rejected {
        title: &'a str,
        reason: ValidationError,
    },
    /// The renderer displayed the notification
    Rendered { title: &'a str },
    /// The renderer reported a failure
    RenderFailed { title: &'a str, cause: &'a str },
}

/// Callback receiving service events
pub type EventSink = Box<dyn for<'a> Fn(ServiceEvent<'a>) + Send + Sync>;

/// The RPC-facing notification handler.
///
/// Holds the single renderer instance for the process lifetime; it is
/// constructed at startup and passed in explicitly rather than living in
/// global state.
pub struct NotificationService<R: ToastRenderer> {
    renderer: R,
    on_event: Option<EventSink>,
}

impl<R: ToastRenderer> NotificationService<R> {
    /// Create a service without event reporting
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            on_event: None,
        }
    }

    /// Create a service that reports call stages to the given sink
    pub fn with_event_sink(renderer: R, on_event: EventSink) -> Self {
        Self {
            renderer,
            on_event: Some(on_event),
        }
    }

    fn emit(&self, event: ServiceEvent<'_>) {
        if let Some(ref sink) = self.on_event {
            sink(event);
        }
    }

    /// Handle one `SendNotification` call.
    ///
    /// Always returns a response. Validation failures and renderer failures
    /// are encoded in the payload rather than failing the call; the renderer
    /// is invoked exactly once, with no retry.
    pub async fn send(&self, request: &NotificationRequest) -> NotificationResponse {
        self.emit(ServiceEvent::Received {
            title: &request.title,
            message: &request.message,
            level: request.level,
        });

        if let Err(reason) = request.validate() {
            self.emit(ServiceEvent::Rejected {
                title: &request.title,
                reason,
            });
            return NotificationResponse::failure(reason.to_string());
        }

        match self
            .renderer
            .render(&request.title, &request.message, request.level)
            .await
        {
            Ok(()) => {
                self.emit(ServiceEvent::Rendered {
                    title: &request.title,
                });
                NotificationResponse::ok()
            }
            Err(e) => {
                let cause = e.to_string();
                self.emit(ServiceEvent::RenderFailed {
                    title: &request.title,
                    cause: &cause,
                });
                NotificationResponse::failure(cause)
            }
        }
    }
}
