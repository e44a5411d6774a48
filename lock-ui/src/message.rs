//! Global success/error banner shared by the widget screens.

use std::sync::Arc;

use tokio::sync::watch;

/// Sink for transient, screen-wide messages.
pub trait MessagePresenter: Send + Sync {
    /// Show a success banner.
    fn show_success(&self, message: &str);

    /// Show an error banner.
    fn show_error(&self, message: &str);

    /// Remove whatever message is currently shown.
    fn hide(&self);
}

/// A banner as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// `false` for errors.
    pub success: bool,
    /// Text shown.
    pub message: String,
}

/// [`MessagePresenter`] backed by a watch channel so a view layer can
/// subscribe to banner changes while presenters write to it.
#[derive(Clone, Debug)]
pub struct BannerPresenter {
    sender: Arc<watch::Sender<Option<Banner>>>,
    receiver: watch::Receiver<Option<Banner>>,
}

impl Default for BannerPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl BannerPresenter {
    /// Presenter with nothing shown.
    pub fn new() -> Self {
        let (sender, receiver) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    /// The banner currently shown, if any.
    pub fn current(&self) -> Option<Banner> {
        self.receiver.borrow().clone()
    }

    /// `None` while no banner is shown.
    pub fn success(&self) -> Option<bool> {
        self.receiver.borrow().as_ref().map(|banner| banner.success)
    }

    /// Text of the banner currently shown.
    pub fn message(&self) -> Option<String> {
        self.receiver
            .borrow()
            .as_ref()
            .map(|banner| banner.message.clone())
    }

    /// Receiver notified on every banner change.
    pub fn subscribe(&self) -> watch::Receiver<Option<Banner>> {
        self.receiver.clone()
    }

    fn set(&self, banner: Option<Banner>) {
        self.sender.send_replace(banner);
    }
}

impl MessagePresenter for BannerPresenter {
    fn show_success(&self, message: &str) {
        self.set(Some(Banner {
            success: true,
            message: message.to_string(),
        }));
    }

    fn show_error(&self, message: &str) {
        self.set(Some(Banner {
            success: false,
            message: message.to_string(),
        }));
    }

    fn hide(&self) {
        self.set(None);
    }
}
