pub mod delivery_status;
pub mod payment_status;
pub mod process_status;
pub mod source_channel;

pub use delivery_status::DeliveryStatus;
pub use payment_status::PaymentStatus;
pub use process_status::ProcessStatus;
pub use source_channel::SourceChannel;
