pub mod flash_tool;
