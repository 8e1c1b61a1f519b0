//! List command implementation

use revisit_core::{ComponentKind, OperationKind};

pub fn run_list() {
    println!("Variants:");
    for kind in ComponentKind::ALL {
        println!("  {}", kind);
    }

    println!();
    println!("Operations:");
    for operation in OperationKind::ALL {
        println!("  {}", operation);
    }
}
