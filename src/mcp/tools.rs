//! MCP tool definitions and dispatch for the student roster.
//!
//! Every tool is listed in [`Tool::ALL`]; `tools/list` and `tools/call` both
//! go through that table, so the advertised catalog and the dispatchable set
//! cannot drift apart.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::roster::{format_student_info, format_student_list, Roster};
use crate::types::Student;

use super::error::{McpError, McpResult};

/// A tool definition exposed by the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description of what the tool does.
    pub description: String,
    /// JSON Schema describing the tool's input parameters.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// The tools this server can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    GetStudentList,
    GetStudentInfo,
}

impl Tool {
    /// Every tool, in the order `tools/list` advertises them.
    pub const ALL: [Tool; 2] = [Tool::GetStudentList, Tool::GetStudentInfo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::GetStudentList => "get_student_list",
            Tool::GetStudentInfo => "get_student_info",
        }
    }

    /// Resolves a tool name sent by the client, or `None` if it is unknown.
    pub fn from_name(name: &str) -> Option<Tool> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// The descriptor advertised for this tool.
    pub fn definition(&self) -> ToolDefinition {
        match self {
            Tool::GetStudentList => ToolDefinition {
                name: self.as_str().to_string(),
                description: "获取班级所有学生的列表".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "section": {
                            "type": "string",
                            "description": "班级名称，可选参数。如果提供，则只返回该班级的学生"
                        }
                    }
                }),
            },
            Tool::GetStudentInfo => ToolDefinition {
                name: self.as_str().to_string(),
                description: "根据学生ID获取单个学生的详细信息".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "student_id": {
                            "type": "string",
                            "description": "学生的唯一标识ID"
                        }
                    },
                    "required": ["student_id"]
                }),
            },
        }
    }
}

/// Returns the list of all tool definitions exposed by this MCP server.
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    Tool::ALL.iter().map(Tool::definition).collect()
}

/// Wraps text in the result shape shared by every tool:
/// `{"content": [{"type": "text", "text": ...}]}`.
pub fn text_result(text: String) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }]
    })
}

/// Dispatches a tool call to the appropriate handler.
///
/// `args` is the already-normalized `arguments` mapping; callers pass an
/// empty map when the client sent none.
pub fn handle_tool_call(
    roster: &Roster,
    tool_name: &str,
    args: &Map<String, Value>,
) -> McpResult<Value> {
    match Tool::from_name(tool_name) {
        Some(Tool::GetStudentList) => handle_student_list(roster, args),
        Some(Tool::GetStudentInfo) => handle_student_info(roster, args),
        None => Err(McpError::ToolNotFound),
    }
}

/// Handles `get_student_list` tool calls.
///
/// A missing, empty or non-string `section` means "no filter".
fn handle_student_list(roster: &Roster, args: &Map<String, Value>) -> McpResult<Value> {
    let section = args
        .get("section")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());

    let students: Vec<&Student> = match section {
        Some(section) => roster.in_section(section),
        None => roster.students().iter().collect(),
    };

    Ok(text_result(format_student_list(&students)))
}

/// Handles `get_student_info` tool calls.
fn handle_student_info(roster: &Roster, args: &Map<String, Value>) -> McpResult<Value> {
    let student_id = args
        .get("student_id")
        .and_then(|v| v.as_str())
        .ok_or(McpError::MissingArgument("student_id"))?;

    let student = roster.find(student_id).ok_or(McpError::StudentNotFound)?;
    Ok(text_result(format_student_info(student)))
}
