//! Prompt template and response schema for recipe generation.

use serde_json::{json, Value};

/// Build the generation prompt for a theme query.
///
/// The query is embedded verbatim.
///
pub fn build_prompt(query: &str, count: usize) -> String {
    format!(
        "你是一位专业的中国营养师和厨师。请为中国当代青年设计{count}道符合\"{query}\"主题的健康食谱。\n\
         \n\
         要求：\n\
         1. 食材在中国市场容易买到。\n\
         2. 做法适合家庭或宿舍小功率厨具。\n\
         3. 口味符合中国年轻人的喜好（如：低脂麻辣、酸爽、清淡等）。\n\
         4. 严格控制热量，并提供营养元素估算。\n\
         5. 输出结果必须是严格的JSON数组格式。\n"
    )
}

/// Return the schema the generated JSON must satisfy.
///
pub fn recipe_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING", "description": "食谱名称，例如：'凉拌鸡胸肉丝'" },
                "description": { "type": "STRING", "description": "简短的描述，吸引人且突出健康特点" },
                "calories": { "type": "INTEGER", "description": "每份的大致卡路里" },
                "timeMinutes": { "type": "INTEGER", "description": "烹饪所需分钟数" },
                "difficulty": { "type": "STRING", "enum": ["Easy", "Medium", "Hard"] },
                "tags": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "标签，例如：低卡, 高蛋白, 快手"
                },
                "ingredients": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "食材列表，包含用量"
                },
                "steps": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "详细的烹饪步骤"
                },
                "macros": {
                    "type": "OBJECT",
                    "properties": {
                        "protein": { "type": "NUMBER" },
                        "fat": { "type": "NUMBER" },
                        "carbs": { "type": "NUMBER" }
                    },
                    "required": ["protein", "fat", "carbs"]
                }
            },
            "required": [
                "title", "description", "calories", "timeMinutes", "difficulty",
                "ingredients", "steps", "macros", "tags"
            ]
        }
    })
}
