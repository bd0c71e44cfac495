// src/workflow/clone.rs

use tracing::debug;

use crate::arena::Arena;
use crate::workflow::Workflow;

impl Workflow {
    /// Structurally independent copy of this workflow named `name`.
    ///
    /// The copy gets a fresh scope with the same parent, a cloned launch job
    /// and the same `executes` names. Every declared job is cloned with its
    /// resolved dependencies cleared and rebound under its own name, so the
    /// next closure computation resolves against the copy's scope.
    ///
    /// Property bags are not carried over; the copy starts with none.
    pub fn clone_as(&self, arena: &mut Arena, name: &str) -> Workflow {
        let scope = arena.scopes.clone_scope(self.scope(), false);
        arena.scopes.set_level(scope, name);

        let mut launch = arena.job(self.launch_job()).clone_unresolved();
        launch.rename(name);
        let launch_job = arena.add_job(launch);

        let mut copy = Workflow::new(name, scope, launch_job);
        copy.launch_dependencies = self.launch_dependencies().to_vec();

        for id in self.jobs() {
            let job = arena.job(*id).clone_unresolved();
            copy.register_job(arena, job);
        }

        debug!(
            from = %self.name(),
            to = %name,
            jobs = copy.jobs().len(),
            "cloned workflow"
        );
        copy
    }
}
