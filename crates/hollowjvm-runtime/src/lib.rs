//! HollowJVM runtime — the VM-environment object
//!
//! The thin collaborator surrounding the core: a [`Jvm`] owns the table of
//! canonical class descriptors, bootstraps the root descriptors, and
//! supplies the lookup entry point embedders and instantiation strategies
//! reach the class model through. No bytecode runs here; the Jvm is a
//! registry with a name.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use hollowjvm_core::{
    class_class, object_class, ClassDescriptor, VmContext, VmError, VmResult,
};

/// Insertion-ordered class table: a hash index beside the ordered list,
/// so lookup is O(1) and enumeration reflects registration order.
#[derive(Default)]
struct ClassTable {
    by_name: FxHashMap<String, usize>,
    ordered: Vec<Arc<ClassDescriptor>>,
}

/// The emulated VM environment.
///
/// Holds one canonical descriptor per registered class name. Internally
/// synchronized: registration and lookup take `&self` and may be
/// interleaved across threads.
pub struct Jvm {
    classes: RwLock<ClassTable>,
}

impl Jvm {
    /// Create a VM environment with the root descriptors
    /// (`java/lang/Object`, `java/lang/Class`) already registered.
    pub fn new() -> Self {
        let jvm = Self {
            classes: RwLock::new(ClassTable::default()),
        };
        // Bootstrap registration cannot collide on a fresh table
        jvm.register_class(object_class())
            .expect("bootstrap class table is empty");
        jvm.register_class(class_class())
            .expect("bootstrap class table is empty");
        jvm
    }

    /// Register a canonical class descriptor under its binary name.
    ///
    /// Returns [`VmError::DuplicateClass`] if a descriptor is already
    /// registered under that name; the table is left unchanged.
    pub fn register_class(&self, class: Arc<ClassDescriptor>) -> VmResult<()> {
        let mut table = self.classes.write();
        if table.by_name.contains_key(class.name()) {
            return Err(VmError::DuplicateClass(class.name().to_string()));
        }
        let index = table.ordered.len();
        table.by_name.insert(class.name().to_string(), index);
        table.ordered.push(class);
        Ok(())
    }

    /// Look up a class descriptor by binary name, or fail with
    /// [`VmError::ClassNotFound`].
    pub fn require_class(&self, name: &str) -> VmResult<Arc<ClassDescriptor>> {
        self.find_class(name)
            .ok_or_else(|| VmError::ClassNotFound(name.to_string()))
    }

    /// Enumerate registered descriptors, in registration order
    pub fn classes(&self) -> Vec<Arc<ClassDescriptor>> {
        self.classes.read().ordered.clone()
    }

    /// Number of registered classes
    pub fn class_count(&self) -> usize {
        self.classes.read().ordered.len()
    }
}

impl VmContext for Jvm {
    fn find_class(&self, name: &str) -> Option<Arc<ClassDescriptor>> {
        let table = self.classes.read();
        let index = *table.by_name.get(name)?;
        Some(Arc::clone(&table.ordered[index]))
    }
}

impl Default for Jvm {
    fn default() -> Self {
        Self::new()
    }
}
