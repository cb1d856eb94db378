use diesel::prelude::*;

use log::debug;

use crate::error::Result;
use crate::models::{NewProject, Project};
use crate::schema::project;

pub fn get_projects(conn: &mut SqliteConnection) -> Result<Vec<Project>> {
    let projects = project::table.order(project::id.asc()).load(conn)?;

    Ok(projects)
}

/// Looks up a project by its external project code.
pub fn get_project_by_id(
    conn: &mut SqliteConnection,
    project_id: &str,
) -> Result<Option<Project>> {
    let found = project::table
        .filter(project::project_id.eq(project_id))
        .first(conn)
        .optional()?;

    Ok(found)
}

pub fn create_project(conn: &mut SqliteConnection, new_project: &NewProject) -> Result<Project> {
    debug!("Add project {}", new_project.project_id);
    let created = diesel::insert_into(project::table)
        .values(new_project)
        .get_result(conn)?;

    Ok(created)
}
