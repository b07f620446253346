pub mod budget;
pub mod expense;
pub mod system;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in expense::definitions()
        .into_iter()
        .chain(budget::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}
