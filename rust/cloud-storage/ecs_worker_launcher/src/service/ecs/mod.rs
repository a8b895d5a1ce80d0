mod run_task;

use aws_sdk_ecs as ecs;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockECSClient as ECS;
#[cfg(not(test))]
pub use ECSClient as ECS;

#[derive(Clone, Debug)]
pub struct ECSClient {
    /// Inner ECS client
    inner: ecs::Client,
}

#[cfg_attr(test, automock)]
impl ECSClient {
    pub fn new(inner: ecs::Client) -> Self {
        Self { inner }
    }

    /// Starts a single task from `task_definition` and returns the arns of the started tasks.
    pub async fn run_task(
        &self,
        task_definition: &str,
        cluster: &str,
    ) -> Result<Vec<String>, anyhow::Error> {
        run_task::run_task(&self.inner, task_definition, cluster).await
    }
}
