pub mod language_tool_client;
