use crate::asset::Asset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerCommand {
    SelectAsset(Asset),
    Shutdown,
}
