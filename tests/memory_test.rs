//! Tests for the memory store and image loading.

use std::io::Write;

use cpu6502::{Cpu, Memory, MemoryBus, MemoryError, FULL_ADDRESS_SPACE};

#[test]
fn test_new_memory_is_zeroed_full_space() {
    let memory = Memory::new();

    assert_eq!(memory.capacity(), FULL_ADDRESS_SPACE);
    assert!(memory.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_small_store_wraps_addresses() {
    let mut memory = Memory::with_capacity(0x0800).expect("allocate 2 KiB");

    memory.write(0x0810, 0x42);

    assert_eq!(memory.read(0x0010), 0x42);
    assert_eq!(memory.read(0x1010), 0x42);
}

#[test]
fn test_cpu_runs_on_small_store() {
    let mut memory = Memory::with_capacity(0x0800).expect("allocate 2 KiB");
    memory.load_image(0x0600, &[0xA9, 0x3C, 0x85, 0x00]); // LDA #$3C ; STA $00

    let mut cpu = Cpu::new(&mut memory);
    cpu.step(5);
    drop(cpu);

    assert_eq!(memory.read(0x0000), 0x3C);
}

#[test]
fn test_load_image_drops_overflow() {
    let mut memory = Memory::new();

    let loaded = memory.load_image(0xFFFE, &[1, 2, 3, 4]);

    assert_eq!(loaded, 2);
    assert_eq!(memory.read(0xFFFE), 1);
    assert_eq!(memory.read(0xFFFF), 2);
    assert_eq!(memory.read(0x0000), 0);
}

#[test]
fn test_load_image_file() {
    let path = std::env::temp_dir().join(format!("cpu6502-image-{}.bin", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).expect("create image");
        file.write_all(&[0xA9, 0x01, 0x00]).expect("write image");
    }

    let mut memory = Memory::new();
    let loaded = memory.load_image_file(0x0600, &path);
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.ok(), Some(3));
    assert_eq!(memory.read(0x0600), 0xA9);
    assert_eq!(memory.read(0x0601), 0x01);
}

#[test]
fn test_load_missing_image_file() {
    let mut memory = Memory::new();

    let result = memory.load_image_file(0x0600, "/nonexistent/cpu6502/data.bin");

    match result {
        Err(MemoryError::ImageUnreadable { path, source }) => {
            assert!(path.ends_with("data.bin"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(memory.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_clear() {
    let mut memory = Memory::new();
    memory.write(0x1234, 0xFF);

    memory.clear();

    assert_eq!(memory.read(0x1234), 0);
}
