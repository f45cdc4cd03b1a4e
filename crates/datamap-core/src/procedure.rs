//! Full-file generator — wraps the structure statements in a complete
//! `DataMapInitProcedure` Java source file.
//!
//! The emitted file registers a world-load event handler that checks
//! whether the mod's persisted root compound for this data map is still
//! absent or empty, and if so builds the full nested structure and attaches
//! it. The synchronization call is emitted twice, before and after the
//! structure is populated; the double call is the persistence guard pattern
//! expected by downstream consumers of this boilerplate and is reproduced
//! deliberately, even though the first call precedes any mutation.
//!
//! The two supported [`Platform`]s are structurally identical and differ
//! only in the import block, the event-subscriber annotation, and the
//! load-event type in the handler signature.

use crate::names::{sanitize_identifier, storage_access, SYNC_CALL};
use crate::structure::generate_structure;
use crate::tree::{Node, NodeKind};

/// Target mod-loader flavor for the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// NeoForge 1.21.1
    NeoForge,
    /// Forge 1.20.1
    Forge,
}

impl Platform {
    /// The platform-specific package and import block.
    fn imports(self) -> &'static str {
        match self {
            Platform::NeoForge => {
                "package net.mcreator.yourmod.procedures;

import net.neoforged.fml.common.EventBusSubscriber;
import net.neoforged.bus.api.SubscribeEvent;
import net.neoforged.bus.api.Event;

import net.minecraft.world.level.LevelAccessor;
import net.minecraft.nbt.StringTag;
import net.minecraft.nbt.DoubleTag;
import net.minecraft.nbt.CompoundTag;
import net.minecraft.nbt.ByteTag;

import net.mcreator.yourmod.network.YourModVariables;

import javax.annotation.Nullable;"
            }
            Platform::Forge => {
                "package net.mcreator.yourmod.procedures;

import net.minecraftforge.fml.common.Mod;
import net.minecraftforge.eventbus.api.SubscribeEvent;
import net.minecraftforge.event.world.WorldEvent;

import net.minecraft.world.level.LevelAccessor;
import net.minecraft.nbt.StringTag;
import net.minecraft.nbt.DoubleTag;
import net.minecraft.nbt.CompoundTag;
import net.minecraft.nbt.ByteTag;

import net.mcreator.yourmod.network.YourModVariables;

import javax.annotation.Nullable;"
            }
        }
    }

    /// The platform-specific class header and world-load entry point. The
    /// handler forwards into the two-argument `execute` routine emitted by
    /// [`generate_file`].
    fn event_handler(self) -> &'static str {
        match self {
            Platform::NeoForge => {
                "@EventBusSubscriber
public class DataMapInitProcedure {
	@SubscribeEvent
	public static void onWorldLoad(net.neoforged.neoforge.event.level.LevelEvent.Load event) {
		execute(event, event.getLevel());
	}"
            }
            Platform::Forge => {
                "@Mod.EventBusSubscriber
public class DataMapInitProcedure {
	@SubscribeEvent
	public static void onWorldLoad(WorldEvent.Load event) {
		execute(event, event.getWorld());
	}"
            }
        }
    }
}

/// Generate the complete procedure source file for `tree`.
///
/// `data_map_name` is the user-supplied data map name; the persisted
/// variable it maps to is derived by [`crate::names::variable_name`].
///
/// Layout, in order: imports, event-subscriber header, the one-argument
/// `execute` overload, then the guarded initialization body. A local
/// `CompoundTag` is declared for every *object-typed* direct child of the
/// root (scalar children need no intermediate container reference), while
/// the attach statements inside the guard cover every direct child.
pub fn generate_file(tree: &Node, data_map_name: &str, platform: Platform) -> String {
    let access = storage_access(data_map_name);
    let mut lines: Vec<String> = Vec::new();

    lines.push("\tpublic static void execute(LevelAccessor world) {".to_string());
    lines.push("\t\texecute(null, world);".to_string());
    lines.push("\t}".to_string());
    lines.push(String::new());
    lines.push(
        "\tprivate static void execute(@Nullable Event event, LevelAccessor world) {".to_string(),
    );
    lines.push("\t\tCompoundTag mainTag;".to_string());
    for (key, child) in tree.children() {
        if child.kind() == NodeKind::Object {
            lines.push(format!("\t\tCompoundTag {};", sanitize_identifier(key)));
        }
    }
    lines.push(String::new());
    lines.push(format!("\t\tif ({} == null || {}.isEmpty()) {{", access, access));
    lines.push(format!("\t\t\t{} = new CompoundTag();", access));
    lines.push(format!("\t\t\t{}", SYNC_CALL));
    for line in generate_structure(tree, "mainTag").lines() {
        lines.push(format!("\t\t\t{}", line));
    }
    for (key, _) in tree.children() {
        lines.push(format!(
            "\t\t\t{}.put(\"{}\", {});",
            access,
            key,
            sanitize_identifier(key)
        ));
    }
    lines.push(format!("\t\t\t{}", SYNC_CALL));
    lines.push("\t\t}".to_string());
    lines.push("\t}".to_string());
    lines.push("}".to_string());

    format!(
        "{}\n\n{}\n\n{}",
        platform.imports(),
        platform.event_handler(),
        lines.join("\n")
    )
}
