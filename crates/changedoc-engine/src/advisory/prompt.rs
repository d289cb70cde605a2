//! Per-mode instructions prepended to the advisory payload

use changedoc_core::model::AdvisoryMode;

const SUMMARY_INSTRUCTIONS: &str = "You are a release documentation assistant. \
Given a set of JSON changes (only newly added or modified values), write a concise \
changelog summary of their impact. Focus on what was added or updated and the likely \
user or system impact. Return STRICT JSON only, no extra keys and no markdown, with \
this schema:\n{\n  \"description\": string\n}\n";

const TABLE_INSTRUCTIONS: &str = "You are a release documentation assistant. \
Given a repository change report, a git diff with its changed JSON files, or an \
industry-change TEMPLATE (JSON or text), return a STRICT JSON object with exactly \
this schema and nothing else:\n\
{\n  \"title\": string,\n  \"description\": string,\n  \"table\": {\n    \
\"columns\": [string],\n    \"rows\": [[string]]\n  }\n}\n\n\
Rules: return ONLY valid JSON for the object above, never wrapped in markdown. \
Pick clear human-readable columns (for example File, Change, Details). Every row \
has as many cells as there are columns. When information is missing, omit the row \
or write 'N/A'.\n";

const DOCUMENT_INSTRUCTIONS: &str = "You are a release documentation assistant. \
Given a repository change report, a git diff with its changed JSON files, or an \
industry-change TEMPLATE (JSON or text), return a STRICT JSON object with exactly \
this schema and nothing else:\n\
{\n  \"title\": string,\n  \"description\": string,\n  \"files\": [\n    {\n      \
\"file\": string,\n      \"changeType\": string,  // added|removed|modified|renamed|unknown\n      \
\"changes\": [string],  // one bullet per change\n      \
\"notes\": string       // optional\n    }\n  ]\n}\n\n\
Rules: return ONLY valid JSON for the object above, never wrapped in markdown. \
When the content is thin, give best-effort summaries.\n";

pub fn instructions(mode: AdvisoryMode) -> &'static str {
    match mode {
        AdvisoryMode::Table => TABLE_INSTRUCTIONS,
        AdvisoryMode::Document => DOCUMENT_INSTRUCTIONS,
        AdvisoryMode::Summary => SUMMARY_INSTRUCTIONS,
    }
}
