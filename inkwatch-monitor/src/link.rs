//! Network link collaborator
//!
//! WiFi association and DHCP live in the board firmware; the monitor only
//! asks for the current state and requests a reconnect while the link is
//! down.

use inkwatch_core::LinkState;

/// Network link driver
pub trait NetworkLink {
    /// Current link state
    fn state(&mut self) -> LinkState;

    /// Try to reassociate and return the resulting state
    ///
    /// May block for the driver's connect timeout.
    fn reconnect(&mut self) -> LinkState;
}
