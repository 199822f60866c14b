pub mod instance_reader;
pub use instance_reader::{InstanceReader, KnapsackReader};
pub mod instance_writer;
pub use instance_writer::InstanceWriter;
