//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements         | Connects to                    |
//! |-------------|--------------------|--------------------------------|
//! | `hardware`  | InputPort          | GPIO inputs, ADC1 channels     |
//! |             | OutputPort         | Indicator and headlamp GPIOs   |
//! | `console`   | NotificationSink   | UART console (any io::Write)   |
//! | `log_sink`  | EventSink          | Serial log output              |
//! | `time`      | DelayNs            | FreeRTOS delay / thread sleep  |

pub mod console;
pub mod hardware;
pub mod log_sink;
pub mod time;
