//! Host-facing command port.
//!
//! Runs inside the USB receive callback: decodes the report, acknowledges
//! it and hands the command to the engine through the command channel.
//! State changes happen exclusively on the engine side, so the callback
//! never contends with the render loop.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::{Channel, Receiver, Sender};
use crate::report::{ACK_ACCEPTED, HostCommand, REPORT_LEN};

/// Report transmission seam towards the USB transport.
pub trait HostLink {
    /// Transmit one report to the host. A zero-length slice is valid and
    /// signals a rejected instruction.
    fn send_report(&mut self, data: &[u8]);
}

/// Channel carrying decoded commands to the engine.
pub type CommandChannel<const N: usize> = Channel<HostCommand, N>;
/// Sender half, held by the port.
pub type CommandSender<'a, const N: usize> = Sender<'a, HostCommand, N>;
/// Receiver half, owned by the engine.
pub type CommandReceiver<'a, const N: usize> = Receiver<'a, HostCommand, N>;

/// Decodes, acknowledges and queues incoming host reports.
pub struct HostPort<'a, L: HostLink, const N: usize> {
    link: L,
    commands: CommandSender<'a, N>,
}

impl<'a, L: HostLink, const N: usize> HostPort<'a, L, N> {
    pub const fn new(link: L, commands: CommandSender<'a, N>) -> Self {
        Self { link, commands }
    }

    /// Handle one received report.
    ///
    /// Settings and control reports are acknowledged with
    /// [`ACK_ACCEPTED`], unrecognized instructions with a zero-length
    /// report, mode switches not at all. Recognized commands are queued
    /// for the engine; a full queue drops the command.
    pub fn on_report(&mut self, report: &[u8; REPORT_LEN]) {
        let command = HostCommand::decode(report);
        match command {
            HostCommand::Settings(_) | HostCommand::Control(_) => {
                self.link.send_report(&ACK_ACCEPTED);
            }
            HostCommand::Mode(_) => {}
            HostCommand::Unknown(_) => {
                #[cfg(feature = "esp32-log")]
                println!("host: unknown instruction, ignoring");
                self.link.send_report(&[]);
                return;
            }
        }
        if self.commands.try_send(command).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("host: command queue full, dropping report");
        }
    }
}
