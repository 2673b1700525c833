use crate::config::constants;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::rngs::OsRng;
use rand::RngCore;
use std::fs;
use std::io;
use std::path::Path;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum PrepareError {
    #[error("Could not gather entropy: {0}")]
    Entropy(#[from] rand::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

const SEPARATOR_WIDTH: usize = 60;

const CHECKLIST: &str = r#"# Vercel Deployment Checklist

## ✅ Pre-Deployment
- [ ] All deployment files are present (vercel.json, Cargo.toml, config.yaml)
- [ ] Project structure is correct (src/, static/, templates/)
- [ ] Code is pushed to GitHub
- [ ] Secret key is generated

## 🏗️ Deployment Steps
1. [ ] Go to [vercel.com](https://vercel.com) and sign up/login
2. [ ] Click "New Project"
3. [ ] Import your GitHub repository
4. [ ] Configure project settings
5. [ ] Click "Deploy"
6. [ ] Add environment variables:
   - ENVIRONMENT=production
   - DEBUG=false
   - SECRET_KEY=[your-generated-key]
7. [ ] Redeploy with environment variables

## 🧪 Post-Deployment Testing
- [ ] App is accessible at Vercel URL
- [ ] Health endpoint (/health) works
- [ ] Home page loads correctly
- [ ] All navigation works
- [ ] User registration works
- [ ] Admin login works

## 🔧 Environment Variables for Vercel
```
ENVIRONMENT=production
DEBUG=false
SECRET_KEY=[your-secret-key-here]
```

## 📱 Your Vercel URL
After deployment, your app will be available at:
`https://your-project-name.vercel.app`

## 🚨 Important Notes
- Vercel uses serverless functions (no persistent storage)
- Database resets on each deployment
- Cold starts may cause initial delays
- Perfect for demos and testing
- Consider external database for production data

---
**Happy deploying on Vercel! 🚀**
"#;

/// Reports every required file and returns whether all of them exist.
pub fn check_required_files(root: &Path, files: &[&str]) -> bool {
    println!("Checking Vercel deployment files...");

    let mut missing = Vec::new();
    for file in files {
        if root.join(file).exists() {
            println!("✅ {}", file);
        } else {
            missing.push(*file);
        }
    }

    if !missing.is_empty() {
        println!("❌ Missing files: {}", missing.join(", "));
        return false;
    }

    println!("✅ All Vercel files are present!");
    true
}

/// Stops at the first missing directory.
pub fn check_project_structure(root: &Path, dirs: &[&str]) -> bool {
    println!("\n🏗️  Checking project structure...");

    for dir in dirs {
        if root.join(dir).is_dir() {
            println!("✅ {}/ directory", dir);
        } else {
            println!("❌ {}/ directory missing", dir);
            return false;
        }
    }

    println!("✅ Project structure is correct!");
    true
}

pub fn new_secret_key() -> Result<String, PrepareError> {
    let mut bytes = [0u8; constants::SECRET_KEY_BYTES];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

pub fn write_secret_key(root: &Path, secret_key: &str) -> Result<(), PrepareError> {
    let contents = format!(
        "SECRET_KEY={}\nENVIRONMENT=production\nDEBUG=false\n",
        secret_key
    );
    fs::write(root.join(constants::SECRET_KEY_FILE), contents)?;
    Ok(())
}

/// Generates a secret and saves it next to the production flags.
/// Failures are logged and reported as `None`.
pub fn generate_secret_key(root: &Path) -> Option<String> {
    println!("\n🔑 Generating secure secret key...");

    let result = new_secret_key().and_then(|key| {
        write_secret_key(root, &key)?;
        Ok(key)
    });

    match result {
        Ok(key) => {
            println!("✅ Generated SECRET_KEY: {}", key);
            println!("📝 Secret key saved to '{}'", constants::SECRET_KEY_FILE);
            println!("💡 Copy these environment variables to Vercel dashboard");
            Some(key)
        }
        Err(e) => {
            error!("could not generate secret key: {}", e);
            println!("❌ Error generating secret key: {}", e);
            None
        }
    }
}

pub fn create_deployment_checklist(root: &Path) -> io::Result<()> {
    println!("\n📋 Creating deployment checklist...");
    fs::write(root.join(constants::CHECKLIST_FILE), CHECKLIST)?;
    println!(
        "✅ Deployment checklist created: '{}'",
        constants::CHECKLIST_FILE
    );
    Ok(())
}

/// Full preparation flow. `Ok(false)` when a check or the secret fails.
pub fn run(root: &Path) -> Result<bool, PrepareError> {
    println!("🚀 Vercel Deployment Preparation for Jubair Boot House");
    println!("{}", "=".repeat(SEPARATOR_WIDTH));

    if !check_required_files(root, &constants::REQUIRED_FILES) {
        println!("\n❌ Please create missing Vercel files before deployment");
        return Ok(false);
    }

    if !check_project_structure(root, &constants::REQUIRED_DIRS) {
        println!("\n❌ Please fix project structure before deployment");
        return Ok(false);
    }

    if generate_secret_key(root).is_none() {
        println!("\n❌ Failed to generate secret key");
        return Ok(false);
    }

    create_deployment_checklist(root)?;

    println!("\n{}", "=".repeat(SEPARATOR_WIDTH));
    println!("🎉 Vercel deployment preparation completed!");
    println!("\n📝 Next steps:");
    println!("1. Push your code to GitHub");
    println!("2. Go to vercel.com and create account");
    println!("3. Import your repository");
    println!("4. Deploy with the generated environment variables");
    println!(
        "\n📋 Check '{}' for detailed steps",
        constants::CHECKLIST_FILE
    );
    println!(
        "🔑 Check '{}' for environment variables",
        constants::SECRET_KEY_FILE
    );

    Ok(true)
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for file in constants::REQUIRED_FILES {
            fs::write(dir.path().join(file), b"").unwrap();
        }
        for d in constants::REQUIRED_DIRS {
            fs::create_dir(dir.path().join(d)).unwrap();
        }
        dir
    }

    #[test]
    fn test_checks_pass_on_complete_project() {
        let dir = project();
        assert!(check_required_files(dir.path(), &constants::REQUIRED_FILES));
        assert!(check_project_structure(dir.path(), &constants::REQUIRED_DIRS));
    }

    #[test]
    fn test_any_missing_file_fails() {
        for file in constants::REQUIRED_FILES {
            let dir = project();
            fs::remove_file(dir.path().join(file)).unwrap();
            assert!(!check_required_files(dir.path(), &constants::REQUIRED_FILES));
            assert!(check_project_structure(dir.path(), &constants::REQUIRED_DIRS));
        }
    }

    #[test]
    fn test_any_missing_dir_fails() {
        for d in constants::REQUIRED_DIRS {
            let dir = project();
            fs::remove_dir(dir.path().join(d)).unwrap();
            assert!(!check_project_structure(dir.path(), &constants::REQUIRED_DIRS));
        }
    }

    #[test]
    fn test_file_in_place_of_dir_fails() {
        let dir = project();
        fs::remove_dir(dir.path().join("static")).unwrap();
        fs::write(dir.path().join("static"), b"").unwrap();
        assert!(!check_project_structure(dir.path(), &constants::REQUIRED_DIRS));
    }

    #[test]
    fn test_secret_keys_are_url_safe_and_unique() {
        let a = new_secret_key().unwrap();
        let b = new_secret_key().unwrap();

        // 32 bytes of base64 without padding
        assert_eq!(a.len(), 43);
        assert!(a
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_secret_key_writes_record() {
        let dir = tempfile::tempdir().unwrap();
        let key = generate_secret_key(dir.path()).unwrap();

        let contents = fs::read_to_string(dir.path().join(constants::SECRET_KEY_FILE)).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                format!("SECRET_KEY={}", key).as_str(),
                "ENVIRONMENT=production",
                "DEBUG=false"
            ]
        );
    }

    #[test]
    fn test_generate_secret_key_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let first = generate_secret_key(dir.path()).unwrap();
        let second = generate_secret_key(dir.path()).unwrap();

        let contents = fs::read_to_string(dir.path().join(constants::SECRET_KEY_FILE)).unwrap();
        assert!(!contents.contains(&first));
        assert!(contents.contains(&second));
    }

    #[test]
    fn test_generate_secret_key_unwritable_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does/not/exist");
        assert!(generate_secret_key(&missing).is_none());
    }

    #[test]
    fn test_checklist_headers() {
        let dir = tempfile::tempdir().unwrap();
        create_deployment_checklist(dir.path()).unwrap();

        let contents = fs::read_to_string(dir.path().join(constants::CHECKLIST_FILE)).unwrap();
        assert!(contents.contains("## ✅ Pre-Deployment"));
        assert!(contents.contains("## 🏗️ Deployment Steps"));
        assert!(contents.contains("## 🧪 Post-Deployment Testing"));
    }

    #[test]
    fn test_checklist_write_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        assert!(create_deployment_checklist(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_run_complete_project() {
        let dir = project();
        assert!(run(dir.path()).unwrap());
        assert!(dir.path().join(constants::SECRET_KEY_FILE).exists());
        assert!(dir.path().join(constants::CHECKLIST_FILE).exists());
    }

    #[test]
    fn test_run_secret_failure_skips_checklist() {
        let dir = project();
        fs::create_dir(dir.path().join(constants::SECRET_KEY_FILE)).unwrap();

        assert!(!run(dir.path()).unwrap());
        assert!(!dir.path().join(constants::CHECKLIST_FILE).exists());
    }

    #[test]
    fn test_run_checklist_write_error() {
        let dir = project();
        fs::create_dir(dir.path().join(constants::CHECKLIST_FILE)).unwrap();

        let result = run(dir.path());
        assert!(matches!(result, Err(PrepareError::Io(_))));
        assert!(dir.path().join(constants::SECRET_KEY_FILE).is_file());
    }

    #[test]
    fn test_run_aborts_before_writing() {
        let dir = project();
        fs::remove_file(dir.path().join("vercel.json")).unwrap();

        assert!(!run(dir.path()).unwrap());
        assert!(!dir.path().join(constants::SECRET_KEY_FILE).exists());
        assert!(!dir.path().join(constants::CHECKLIST_FILE).exists());
    }
}
