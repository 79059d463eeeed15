//! Task dependency ordering.

use std::any::TypeId;
use std::collections::HashMap;

use super::Task;
use crate::error::TaskError;

/// Order tasks so every task comes after its dependencies.
///
/// Ties keep the original list order, so the result is deterministic.
/// Dependencies on tasks absent from the list are ignored.
///
/// # Errors
///
/// Returns [`TaskError::DependencyCycle`] naming the tasks left unordered.
pub fn execution_order(tasks: &[&dyn Task]) -> Result<Vec<usize>, TaskError> {
    let index: HashMap<TypeId, usize> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| (t.task_id(), i))
        .collect();

    let mut in_degree: Vec<usize> = vec![0; tasks.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];
    for (i, task) in tasks.iter().enumerate() {
        for dep in task.dependencies() {
            if let Some(&d) = index.get(dep)
                && let (Some(list), Some(count)) = (dependents.get_mut(d), in_degree.get_mut(i))
            {
                list.push(i);
                *count += 1;
            }
        }
    }

    let mut order = Vec::with_capacity(tasks.len());
    let mut done = vec![false; tasks.len()];
    while order.len() < tasks.len() {
        let Some(next) = (0..tasks.len())
            .find(|&i| !done.get(i).copied().unwrap_or(true) && in_degree.get(i) == Some(&0))
        else {
            let stuck: Vec<&str> = tasks
                .iter()
                .zip(&done)
                .filter(|&(_, &d)| !d)
                .map(|(t, _)| t.name())
                .collect();
            return Err(TaskError::DependencyCycle(stuck.join(", ")));
        };
        if let Some(flag) = done.get_mut(next) {
            *flag = true;
        }
        order.push(next);
        for &dependent in dependents.get(next).map_or(&[][..], Vec::as_slice) {
            if let Some(count) = in_degree.get_mut(dependent) {
                *count -= 1;
            }
        }
    }
    Ok(order)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::tasks::{Context, TaskResult};

    use anyhow::Result;

    macro_rules! mock_task {
        ($name:ident, $display:expr, $deps:expr) => {
            struct $name;
            impl Task for $name {
                fn name(&self) -> &str {
                    $display
                }
                fn dependencies(&self) -> &[TypeId] {
                    const DEPS: &[TypeId] = $deps;
                    DEPS
                }
                fn should_run(&self, _ctx: &Context) -> bool {
                    true
                }
                fn run(&self, _ctx: &Context) -> Result<TaskResult> {
                    Ok(TaskResult::Ok)
                }
            }
        };
    }

    mock_task!(Brew, "brew", &[]);
    mock_task!(Npm, "npm", &[TypeId::of::<Brew>()]);
    mock_task!(Aws, "aws", &[]);
    mock_task!(Profile, "profile", &[TypeId::of::<Npm>(), TypeId::of::<Aws>()]);
    mock_task!(CycA, "cyc-a", &[TypeId::of::<CycB>()]);
    mock_task!(CycB, "cyc-b", &[TypeId::of::<CycA>()]);
    mock_task!(Orphan, "orphan", &[TypeId::of::<Aws>()]);

    fn names(tasks: &[&dyn Task], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| tasks[i].name().to_string()).collect()
    }

    #[test]
    fn declared_order_kept_when_already_valid() {
        let tasks: Vec<&dyn Task> = vec![&Brew, &Npm, &Aws, &Profile];
        let order = execution_order(&tasks).unwrap();
        assert_eq!(names(&tasks, &order), ["brew", "npm", "aws", "profile"]);
    }

    #[test]
    fn dependents_move_after_dependencies() {
        let tasks: Vec<&dyn Task> = vec![&Profile, &Npm, &Aws, &Brew];
        let order = execution_order(&tasks).unwrap();
        assert_eq!(names(&tasks, &order), ["aws", "brew", "npm", "profile"]);
    }

    #[test]
    fn missing_dependency_is_ignored() {
        let tasks: Vec<&dyn Task> = vec![&Orphan, &Brew];
        let order = execution_order(&tasks).unwrap();
        assert_eq!(names(&tasks, &order), ["orphan", "brew"]);
    }

    #[test]
    fn cycle_is_reported() {
        let tasks: Vec<&dyn Task> = vec![&Brew, &CycA, &CycB];
        let err = execution_order(&tasks).unwrap_err();
        assert!(matches!(err, TaskError::DependencyCycle(ref s) if s == "cyc-a, cyc-b"));
    }

    #[test]
    fn install_tasks_resolve() {
        let tasks = crate::tasks::all_install_tasks();
        let refs: Vec<&dyn Task> = tasks.iter().map(Box::as_ref).collect();
        let order = execution_order(&refs).unwrap();
        assert_eq!(order.len(), refs.len());
        assert_eq!(
            refs[*order.last().unwrap()].name(),
            "Configure shell profile"
        );
    }
}
