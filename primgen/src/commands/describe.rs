use anyhow::Context;
use primgen_core::{PrimitiveDescriptor, PrimitiveKind, Registry};
use std::io::Write;

/// Prints the attributes of one kind, or of every kind in registry order.
///
/// # Errors
/// Fails on an unknown kind name or if the writer fails.
pub fn describe(kind: Option<&str>, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let registry = Registry::standard();
    let selected: Vec<&PrimitiveDescriptor> = match kind {
        Some(name) => {
            let kind: PrimitiveKind = name.parse()?;
            vec![registry.get(kind)]
        }
        None => registry.all().iter().collect(),
    };

    if json {
        let text = match selected.as_slice() {
            [single] if kind.is_some() => serde_json::to_string_pretty(single),
            _ => serde_json::to_string_pretty(&selected),
        }
        .context("failed to serialize descriptors")?;
        writeln!(out, "{text}")?;
        return Ok(());
    }

    for (i, d) in selected.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_text(d, out)?;
    }
    Ok(())
}

fn write_text(d: &PrimitiveDescriptor, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", d.type_name)?;
    writeln!(out, "  PrimitiveType  {}", d.primitive_type)?;
    writeln!(out, "  WrapperType    {}", d.wrapper_type)?;
    writeln!(out, "  Var            {}", d.var)?;
    writeln!(out, "  IsSpecialized  {}", d.is_specialized)?;
    writeln!(out, "  IsIntegral     {}", d.is_integral)?;
    writeln!(out, "  IsFloating     {}", d.is_floating)?;
    writeln!(out, "  LiftToInt      {}", d.lift_to_int)?;
    match &d.values.zero {
        Some(zero) => writeln!(out, "  Values.Zero    {zero}")?,
        None => writeln!(out, "  Values.Zero    null")?,
    }
    writeln!(out, "  Values.Default {}", d.values.default)?;
    if let (Some(bits), Some(to_bits), Some(to_raw_bits)) = (d.bits_type, d.to_bits, d.to_raw_bits)
    {
        writeln!(out, "  BitsType       {bits}")?;
        writeln!(out, "  ToBits         {to_bits}")?;
        writeln!(out, "  ToRawBits      {to_raw_bits}")?;
    }
    Ok(())
}
