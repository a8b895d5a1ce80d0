use anyhow::Context;

#[tracing::instrument(skip(ecs_client))]
pub(in crate::service::ecs) async fn run_task(
    ecs_client: &aws_sdk_ecs::Client,
    task_definition: &str,
    cluster: &str,
) -> Result<Vec<String>, anyhow::Error> {
    let output = ecs_client
        .run_task()
        .task_definition(task_definition)
        .cluster(cluster)
        .count(1)
        .send()
        .await
        .inspect_err(|e| tracing::error!(error=?e, "unable to run task"))
        .context("unable to run task")?;

    // RunTask succeeds at the api level even when no container instance could place the task
    if output.tasks().is_empty() {
        let failures = output
            .failures()
            .iter()
            .map(|failure| {
                format!(
                    "{}: {}",
                    failure.arn().unwrap_or("unknown"),
                    failure.reason().unwrap_or("unknown reason")
                )
            })
            .collect::<Vec<String>>();
        tracing::error!(failures=?failures, "no task was started");
        anyhow::bail!("no task was started: [{}]", failures.join(", "));
    }

    Ok(output
        .tasks()
        .iter()
        .filter_map(|task| task.task_arn())
        .map(|arn| arn.to_string())
        .collect())
}
