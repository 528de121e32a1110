use crate::domain::model::{default_accounts, AccountDescriptor, RecordTemplate};
use crate::domain::ports::AccountSource;
use crate::utils::error::{GuideError, Result};
use std::io::{self, Write};

pub const START_BANNER: &str = "🔄 Membuat akun staff untuk testing...";
pub const CONSOLE_HEADER: &str = "📋 Cara membuat akun staff di Firebase Console:";
pub const DONE_BANNER: &str = "✅ Setelah setup selesai, coba login dengan:";

const CONSOLE_STEPS: [&str; 3] = [
    "1. Buka Firebase Console → Authentication → Users",
    "2. Klik 'Add user'",
    "3. Masukkan data berikut:",
];

const STORE_STEPS: [&str; 4] = [
    "4. Setelah user dibuat, buka Firestore Database",
    "5. Buat collection 'users' jika belum ada",
    "6. Untuk setiap user, buat document dengan ID = UID user",
    "7. Isi document dengan struktur:",
];

/// Prints the manual setup guide for the test staff accounts.
///
/// The guide has three parts: creating each account in the auth console,
/// mirroring it as a document in the database (with an example document),
/// and the logins to try afterwards. Account order is preserved everywhere.
#[derive(Debug, Clone)]
pub struct InstructionPrinter {
    accounts: Vec<AccountDescriptor>,
    template: RecordTemplate,
}

impl InstructionPrinter {
    pub fn new<S: AccountSource + ?Sized>(source: &S) -> Result<Self> {
        let accounts = source.accounts().to_vec();
        let first = accounts.first().ok_or_else(|| GuideError::MissingConfigError {
            field: "accounts".to_string(),
        })?;
        let template = RecordTemplate::example_for(first);

        Ok(Self { accounts, template })
    }

    pub fn accounts(&self) -> &[AccountDescriptor] {
        &self.accounts
    }

    pub fn template(&self) -> &RecordTemplate {
        &self.template
    }

    pub fn print(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.print_to(&mut handle)
    }

    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.print_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn print_to<W: Write>(&self, out: &mut W) -> Result<()> {
        tracing::debug!("Printing setup guide for {} accounts", self.accounts.len());

        self.write_console_steps(out)?;
        self.write_store_steps(out)?;
        self.write_login_check(out)?;

        out.flush()?;
        Ok(())
    }

    fn write_console_steps<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", START_BANNER)?;
        writeln!(out, "{}", CONSOLE_HEADER)?;
        for step in CONSOLE_STEPS {
            writeln!(out, "{}", step)?;
        }

        for (index, staff) in self.accounts.iter().enumerate() {
            writeln!(out, "\n--- Staff {} ---", index + 1)?;
            writeln!(out, "Email: {}", staff.email)?;
            writeln!(out, "Password: {}", staff.password)?;
            writeln!(out, "Display Name: {}", staff.display_name)?;
        }

        Ok(())
    }

    fn write_store_steps<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        for step in STORE_STEPS {
            writeln!(out, "{}", step)?;
        }

        let document = self.template.to_pretty_json()?;
        writeln!(out, "{}", document)?;
        Ok(())
    }

    fn write_login_check<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\n{}", DONE_BANNER)?;
        for (index, staff) in self.accounts.iter().enumerate() {
            writeln!(
                out,
                "Staff {}: ID = {}, Password = {}",
                index + 1,
                staff.staff_id,
                staff.password
            )?;
        }
        Ok(())
    }
}

impl Default for InstructionPrinter {
    fn default() -> Self {
        let accounts = default_accounts();
        let template = RecordTemplate::example_for(&accounts[0]);
        Self { accounts, template }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_GUIDE: &str = "🔄 Membuat akun staff untuk testing...
📋 Cara membuat akun staff di Firebase Console:
1. Buka Firebase Console → Authentication → Users
2. Klik 'Add user'
3. Masukkan data berikut:

--- Staff 1 ---
Email: staff001@staff.tutgo.com
Password: staff123
Display Name: Admin Utama

--- Staff 2 ---
Email: staff002@staff.tutgo.com
Password: staff123
Display Name: Operator 1

4. Setelah user dibuat, buka Firestore Database
5. Buat collection 'users' jika belum ada
6. Untuk setiap user, buat document dengan ID = UID user
7. Isi document dengan struktur:
{
  \"uid\": \"firebase_user_uid\",
  \"name\": \"Admin Utama\",
  \"email\": \"staff001@staff.tutgo.com\",
  \"staffId\": \"STAFF001\",
  \"userType\": \"staff\",
  \"createdAt\": \"timestamp\",
  \"updatedAt\": \"timestamp\"
}

✅ Setelah setup selesai, coba login dengan:
Staff 1: ID = STAFF001, Password = staff123
Staff 2: ID = STAFF002, Password = staff123
";

    #[test]
    fn test_default_guide_text() {
        let guide = InstructionPrinter::default().render().unwrap();
        assert_eq!(guide, EXPECTED_GUIDE);
    }

    #[test]
    fn test_builtin_source_matches_default() {
        let from_source = InstructionPrinter::new(&crate::BuiltinAccounts::new()).unwrap();

        assert_eq!(from_source.accounts(), InstructionPrinter::default().accounts());
        assert_eq!(from_source.render().unwrap(), EXPECTED_GUIDE);
    }

    #[test]
    fn test_empty_source_rejected() {
        let empty: Vec<AccountDescriptor> = Vec::new();
        let err = InstructionPrinter::new(&empty).unwrap_err();

        assert!(matches!(err, GuideError::MissingConfigError { .. }));
    }

    #[test]
    fn test_template_follows_first_account() {
        let accounts = vec![
            AccountDescriptor::new("ops@example.com", "secret", "Ops", "OPS1"),
            AccountDescriptor::new("ops2@example.com", "secret2", "Ops 2", "OPS2"),
        ];
        let printer = InstructionPrinter::new(&accounts).unwrap();

        assert_eq!(printer.template().staff_id, "OPS1");
        assert_eq!(printer.template().uid, RecordTemplate::UID_PLACEHOLDER);
        assert!(printer.render().unwrap().contains("Staff 2: ID = OPS2, Password = secret2"));
    }

    #[test]
    fn test_closed_sink_surfaces_io_error() {
        struct ClosedPipe;

        impl Write for ClosedPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = InstructionPrinter::default().print_to(&mut ClosedPipe).unwrap_err();
        assert!(matches!(err, GuideError::IoError(_)));
    }
}
