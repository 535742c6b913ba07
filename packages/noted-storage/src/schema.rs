pub fn render_schema() -> String {
	let init = include_str!("../../../sql/init.sql");

	expand_includes(init)
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			match path.trim() {
				"tables/001_notes.sql" =>
					out.push_str(include_str!("../../../sql/tables/001_notes.sql")),
				// Unknown includes stay in place so execution fails loudly instead of
				// silently skipping schema.
				_ => {
					out.push_str(line);
					out.push('\n');
				},
			}
		} else {
			out.push_str(line);
			out.push('\n');
		}
	}

	out
}

#[cfg(test)]
mod tests {
	#[test]
	fn schema_inlines_table_files() {
		let sql = super::render_schema();

		assert!(sql.contains("CREATE TABLE IF NOT EXISTS notes"));
		assert!(sql.contains("idx_notes_created_at"));
		assert!(!sql.contains("\\ir"));
	}
}
